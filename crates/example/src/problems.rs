//! Built-in problems.

use graphplan_strips::{Action, Fluent, Literal, Problem, ProblemError};

/// "Have cake and eat cake too".
///
/// Start with a cake, end having eaten it and still having one. Eating
/// consumes the cake and baking needs its absence, so the goal literals
/// first coexist one level after they first appear.
///
/// # Errors
///
/// Never fails in practice; the signature mirrors [`Problem::new`].
pub fn have_cake() -> Result<Problem, ProblemError> {
    let have = Fluent::new("Have(Cake)");
    let eaten = Fluent::new("Eaten(Cake)");

    let eat = Action::new(
        "Eat(Cake)",
        [Literal::positive(have.clone())],
        [Literal::negative(have.clone()), Literal::positive(eaten.clone())],
    );
    let bake = Action::new(
        "Bake(Cake)",
        [Literal::negative(have.clone())],
        [Literal::positive(have.clone())],
    );

    Problem::new(
        vec![have.clone(), eaten.clone()],
        vec![true, false],
        [Literal::positive(have), Literal::positive(eaten)],
        vec![eat, bake],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn have_cake_is_well_formed() {
        let problem = have_cake().unwrap();
        assert_eq!(problem.state_map().len(), 2);
        assert_eq!(problem.initial_state(), &[true, false]);
        assert_eq!(problem.goal().len(), 2);
        assert_eq!(problem.actions().len(), 2);
    }
}
