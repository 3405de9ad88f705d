//! Login gate in front of the task menu.
//!
//! The credential check is a placeholder equality comparison, not a security
//! boundary.

use crate::prompt::ask;
use log::info;
use std::io::{self, BufRead, Write};

const PLACEHOLDER_EMAIL: &str = "rohit@gmail.com";
const PLACEHOLDER_PASSWORD: &str = "Test@1234";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// The fixed account accepted by the CLI.
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_EMAIL, PLACEHOLDER_PASSWORD)
    }

    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

/// Result of one login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted,
    Rejected,
    /// Input ended before both fields were read.
    Aborted,
}

/// Runs a single login attempt.
pub fn login<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    credentials: &Credentials,
) -> io::Result<LoginOutcome> {
    writeln!(output, "Please log in to access the Task Manager.")?;

    let Some(email) = ask(input, output, "Enter your email: ")? else {
        return Ok(LoginOutcome::Aborted);
    };
    let Some(password) = ask(input, output, "Enter your password: ")? else {
        return Ok(LoginOutcome::Aborted);
    };

    if credentials.matches(&email, &password) {
        writeln!(output, "Login successful!\n")?;
        info!("event=login module=cli status=ok");
        Ok(LoginOutcome::Accepted)
    } else {
        writeln!(output, "Invalid email or password. Please try again.\n")?;
        info!("event=login module=cli status=rejected");
        Ok(LoginOutcome::Rejected)
    }
}

/// Repeats `login` until it succeeds.
///
/// Returns `false` when input ends first.
pub fn login_until_accepted<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    credentials: &Credentials,
) -> io::Result<bool> {
    loop {
        match login(input, output, credentials)? {
            LoginOutcome::Accepted => return Ok(true),
            LoginOutcome::Rejected => continue,
            LoginOutcome::Aborted => return Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{login, login_until_accepted, Credentials, LoginOutcome};
    use std::io::Cursor;

    fn creds() -> Credentials {
        Credentials::new("me@example.com", "secret")
    }

    #[test]
    fn accepts_trimmed_matching_credentials() {
        let mut input = Cursor::new(" me@example.com \n secret\n");
        let mut output = Vec::new();

        let outcome = login(&mut input, &mut output, &creds()).expect("login io");
        assert_eq!(outcome, LoginOutcome::Accepted);
        assert!(String::from_utf8(output).expect("output is UTF-8").contains("Login successful!"));
    }

    #[test]
    fn retries_until_accepted() {
        let mut input = Cursor::new("me@example.com\nwrong\nme@example.com\nsecret\n");
        let mut output = Vec::new();

        assert!(login_until_accepted(&mut input, &mut output, &creds()).expect("login io"));
        let text = String::from_utf8(output).expect("output is UTF-8");
        assert_eq!(text.matches("Invalid email or password").count(), 1);
        assert!(text.contains("Login successful!"));
    }

    #[test]
    fn end_of_input_aborts_login() {
        let mut input = Cursor::new("me@example.com\n");
        let mut output = Vec::new();

        assert!(!login_until_accepted(&mut input, &mut output, &creds()).expect("login io"));
    }

    #[test]
    fn placeholder_account_matches_exactly() {
        let creds = Credentials::placeholder();
        assert!(creds.matches("rohit@gmail.com", "Test@1234"));
        assert!(!creds.matches("rohit@gmail.com", "test@1234"));
    }
}
