pub mod intake;
pub mod screening;

// Re-export screening questionnaires
pub use screening::{medication_check, pain_screening};

// Re-export intake questionnaires
pub use intake::follow_up_intake;
