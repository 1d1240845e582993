use api::flows::SignupStep;
use dioxus::prelude::*;

const STEPS: [SignupStep; 3] = [SignupStep::VerifyEmail, SignupStep::VerifyPhone, SignupStep::Details];

/// Progress bar for the signup wizard.
#[component]
pub fn StepIndicator(current: SignupStep) -> Element {
    rsx! {
        div {
            class: "step-indicator",
            for step in STEPS {
                div {
                    key: "{step.number()}",
                    class: if step <= current { "step-dot done" } else { "step-dot" },
                    title: step.title(),
                }
            }
        }
        p {
            class: "muted",
            if current == SignupStep::Complete {
                "{current.title()}"
            } else {
                "Step {current.number()} of {STEPS.len()}: {current.title()}"
            }
        }
    }
}
