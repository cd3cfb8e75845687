//! Page variants bundled with the crate.

use crate::page::{Page, PageError};
use std::fmt;
use std::str::FromStr;

const TEACHER_GUIDE: &str = include_str!("../../pages/teacher_guide.toml");
const STUDENT_WALKTHROUGH: &str = include_str!("../../pages/student_walkthrough.toml");

/// A bundled page variant.
///
/// Variants differ only in their content; all of them mount into the same
/// [`PageView`](crate::page::PageView).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Six-step methodology for teachers, with classroom resources
    TeacherGuide,
    /// Five-step carousel aimed at students, with a benefits grid
    StudentWalkthrough,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::TeacherGuide, Variant::StudentWalkthrough];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::TeacherGuide => "teacher-guide",
            Self::StudentWalkthrough => "student-walkthrough",
        }
    }

    /// Raw TOML shipped for this variant.
    pub fn source(&self) -> &'static str {
        match self {
            Self::TeacherGuide => TEACHER_GUIDE,
            Self::StudentWalkthrough => STUDENT_WALKTHROUGH,
        }
    }

    /// Parse and validate the bundled page.
    pub fn page(&self) -> Result<Page, PageError> {
        Page::from_toml_str(self.source())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Variant {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.slug() == s)
            .ok_or_else(|| PageError::UnknownVariant {
                name: s.to_string(),
            })
    }
}
