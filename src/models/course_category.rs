use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CourseCategory {
    WebDevelopment,
    Graphics3d,
    ComputerScience,
}

impl CourseCategory {
    pub const ALL: [CourseCategory; 3] = [
        Self::WebDevelopment,
        Self::Graphics3d,
        Self::ComputerScience,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WebDevelopment => "Web Development",
            Self::Graphics3d => "3D Graphics",
            Self::ComputerScience => "Computer Science",
        }
    }
}

impl std::fmt::Display for CourseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CourseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("invalid course category: {}", s))
    }
}
