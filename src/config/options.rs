// src/config/options.rs
use std::fmt;
use std::str::FromStr;

/// Account type sent as `usertype` in the login form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UserType {
    Teacher = 0,
    Student = 1,
    #[default]
    Parent = 2,
}

impl UserType {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for UserType {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(UserType::Teacher),
            1 => Ok(UserType::Student),
            2 => Ok(UserType::Parent),
            other => Err(format!("Unknown user type: {other} (0 = teacher, 1 = student, 2 = parent)")),
        }
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code: u8 = s.trim().parse().map_err(|_| format!("User type must be 0, 1 or 2, got: {s}"))?;
        UserType::try_from(code)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Debug = 10,
    Info = 20,
    Warning = 30,
    Error = 40,
    Critical = 50,
}

impl LogLevel {
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" => Ok(LogLevel::Critical),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            other => Err(format!("Unknown log level: {other}")),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub usertype: UserType,
}

// Keep the password out of debug logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("usertype", &self.usertype)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_accepts_cli_spellings() {
        assert_eq!("warn".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!("WARNING".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!("Debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!("critical".parse::<LogLevel>(), Ok(LogLevel::Critical));
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn user_type_codes() {
        assert_eq!(UserType::try_from(0), Ok(UserType::Teacher));
        assert_eq!(UserType::try_from(2).map(UserType::code), Ok(2));
        assert!(UserType::try_from(3).is_err());
        assert_eq!(UserType::default(), UserType::Parent);
        assert_eq!("1".parse::<UserType>(), Ok(UserType::Student));
        assert!("parent".parse::<UserType>().is_err());
    }

    #[test]
    fn credentials_debug_hides_password() {
        let c = Credentials { username: s!("anna"), password: s!("hunter2"), usertype: UserType::Parent };
        let dbg = format!("{c:?}");
        assert!(dbg.contains("anna"));
        assert!(!dbg.contains("hunter2"));
    }
}
