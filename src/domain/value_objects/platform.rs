//! Platform profile
//!
//! Shell invocation details for the host operating system, selected once at
//! startup and passed to the process runner by value.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Unix,
    Windows,
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsFamily::Unix => write!(f, "unix"),
            OsFamily::Windows => write!(f, "windows"),
        }
    }
}

/// How commands are composed and handed to the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformProfile {
    pub family: OsFamily,
    /// Shell executable
    pub shell: &'static str,
    /// Flag telling the shell to run one command string and exit
    pub exec_flag: &'static str,
    /// Prefix of an environment assignment (`export `, `set `)
    pub env_assign: &'static str,
    /// Logical-AND separator between command pieces
    pub and_operator: &'static str,
}

impl PlatformProfile {
    pub fn unix() -> Self {
        Self {
            family: OsFamily::Unix,
            shell: "sh",
            exec_flag: "-c",
            env_assign: "export ",
            and_operator: "&&",
        }
    }

    pub fn windows() -> Self {
        Self {
            family: OsFamily::Windows,
            shell: "cmd",
            exec_flag: "/C",
            env_assign: "set ",
            and_operator: "&&",
        }
    }

    /// Profile of the host this binary was built for
    pub fn detect() -> Self {
        if cfg!(windows) {
            Self::windows()
        } else {
            Self::unix()
        }
    }

    /// Render one environment assignment
    pub fn assignment(&self, key: &str, value: &str) -> String {
        format!("{}{}={}", self.env_assign, key, value)
    }
}

impl Default for PlatformProfile {
    fn default() -> Self {
        Self::detect()
    }
}
