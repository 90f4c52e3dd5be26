pub mod trainer;
pub mod pass;
pub mod fit_loop;

pub use trainer::{Target, Trainable, Trainer};
pub use pass::{run_pass, Learner, LossReporting, PassStats};
pub use fit_loop::{FitHandle, FitLoop, FitState};
