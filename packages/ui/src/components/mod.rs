//! Form and feedback primitives shared by every page.

mod alert;
mod button;
mod input;
mod label;
mod steps;

pub use alert::{Alert, AlertKind};
pub use button::{Button, ButtonVariant};
pub use input::{Input, Select, Textarea};
pub use label::{FormField, Label};
pub use steps::StepIndicator;
