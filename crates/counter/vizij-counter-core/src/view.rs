//! Render surfaces for hosts.
//!
//! Idle/Running show one dull live label. Finished shows two co-mounted
//! labels bound to the same end text: a static one and a flourish layered on
//! top for the zoom transition. Only classes differ between them.

use serde::{Deserialize, Serialize};

use crate::config::{Color, Size};
use crate::state::AnimationState;

pub const CLASS_NUMBER: &str = "number";
pub const CLASS_DULL: &str = "dull";
pub const CLASS_STATIC: &str = "staticNumber";
pub const CLASS_FLOURISH: &str = "animatedNumber";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceRole {
    /// In-progress value (also shown while idle).
    Live,
    /// Final value label.
    Static,
    /// Final value label with the finishing transition.
    Flourish,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub role: SurfaceRole,
    pub text: String,
    pub classes: Vec<String>,
}

impl Surface {
    /// Space-joined class list, ready for a `class` attribute.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CounterView {
    pub state: AnimationState,
    pub surfaces: Vec<Surface>,
}

impl CounterView {
    pub fn surface(&self, role: SurfaceRole) -> Option<&Surface> {
        self.surfaces.iter().find(|s| s.role == role)
    }
}

fn classes(names: &[&str]) -> Vec<String> {
    names.iter().map(|c| (*c).to_string()).collect()
}

/// Build the surfaces for `state`. `text` is the live text for Idle/Running
/// and the formatted end value for Finished.
pub fn build_view(state: AnimationState, text: String, size: Size, color: Color) -> CounterView {
    let surfaces = match state {
        AnimationState::Idle | AnimationState::Running => vec![Surface {
            role: SurfaceRole::Live,
            text,
            // live label carries no color class
            classes: classes(&[CLASS_NUMBER, CLASS_DULL, size.class_name()]),
        }],
        AnimationState::Finished => vec![
            Surface {
                role: SurfaceRole::Static,
                text: text.clone(),
                classes: classes(&[
                    CLASS_NUMBER,
                    CLASS_STATIC,
                    size.class_name(),
                    color.class_name(),
                ]),
            },
            Surface {
                role: SurfaceRole::Flourish,
                text,
                classes: classes(&[
                    CLASS_NUMBER,
                    CLASS_FLOURISH,
                    size.class_name(),
                    color.class_name(),
                ]),
            },
        ],
    };
    CounterView { state, surfaces }
}
