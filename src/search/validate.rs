use crate::map::Location;
use crate::search::{states::State, Cost, Plan, SearchError, SearchProblem};

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("step {step}: no transition to {label} from {state:?}")]
    NotApplicable {
        step: usize,
        label: Location,
        state: State,
    },
    #[error("plan does not reach an end state, final state is {0:?}")]
    NotAtEnd(State),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Replay `plan` from the start state of `problem`, following at every step
/// the cheapest transition carrying the step's label. Returns the cost of the
/// plan if it ends in an end state.
pub fn validate(plan: &Plan, problem: &dyn SearchProblem) -> Result<Cost, ValidationError> {
    let mut cur_state = problem.start_state();
    let mut cost = Cost::from(0.);
    for (step, &label) in plan.steps().iter().enumerate() {
        let successor = problem
            .successors_and_costs(&cur_state)?
            .into_iter()
            .filter(|successor| successor.label == label)
            .min_by_key(|successor| successor.cost);
        match successor {
            Some(successor) => {
                cost += successor.cost;
                cur_state = successor.state;
            }
            None => {
                return Err(ValidationError::NotApplicable {
                    step,
                    label,
                    state: cur_state,
                })
            }
        }
    }

    if !problem.is_end(&cur_state)? {
        return Err(ValidationError::NotAtEnd(cur_state));
    }

    Ok(cost)
}
