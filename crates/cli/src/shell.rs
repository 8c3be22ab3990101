//! Line-oriented session: account meta-commands plus warehouse utterances.
//!
//! ```text
//! :register <username> <password>
//! :login <username> <password>
//! :logout
//! :listen
//! :help
//! :quit
//! ```
//!
//! Any other non-blank line is an utterance for the assistant.

use voicepick_assistant::Interpreter;
use voicepick_auth::authenticator::{LOGIN_FAILED, LOGIN_SUCCEEDED};
use voicepick_auth::{AuthError, Authenticator, CredentialStore, Session};
use voicepick_core::RequestContext;

pub const HELP: &str = "\
Commands:
  :register <username> <password>
  :login <username> <password>
  :logout
  :listen      (one voice round from the transcript feed)
  :quit
Ask, once logged in: \"tell me about <product>\" or \"where is <product>\".";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    Reply(String),
    /// Run one voice round; the caller owns capture and output.
    Listen,
    Nothing,
    Quit,
}

pub struct Shell<S> {
    interpreter: Interpreter,
    auth: Authenticator<S>,
    session: Option<Session>,
}

impl<S: CredentialStore> Shell<S> {
    pub fn new(interpreter: Interpreter, auth: Authenticator<S>) -> Self {
        Self {
            interpreter,
            auth,
            session: None,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Context for the current login state.
    pub fn context(&self) -> RequestContext {
        self.session
            .as_ref()
            .map(Session::context)
            .unwrap_or_else(RequestContext::anonymous)
    }

    pub fn handle_line(&mut self, line: &str) -> ShellAction {
        let line = line.trim();
        if line.is_empty() {
            return ShellAction::Nothing;
        }

        let Some(meta) = line.strip_prefix(':') else {
            let reply = self.interpreter.handle(&self.context(), line);
            return ShellAction::Reply(reply.text);
        };

        let (command, rest) = split_word(meta);
        let (username, password) = split_word(rest);
        let password = password.trim();

        match command {
            "register" => self.register(username, password),
            "login" => self.login(username, password),
            "logout" => {
                if let Some(session) = self.session.take() {
                    tracing::info!(username = %session.username, "logged out");
                }
                ShellAction::Reply("Logged out.".to_string())
            }
            "listen" => ShellAction::Listen,
            "help" => ShellAction::Reply(HELP.to_string()),
            "quit" | "exit" => ShellAction::Quit,
            other => ShellAction::Reply(format!("Unknown command `:{other}`. Type :help.")),
        }
    }

    fn register(&mut self, username: &str, password: &str) -> ShellAction {
        match self.auth.register(username, password) {
            Ok(outcome) => ShellAction::Reply(outcome.message().to_string()),
            Err(err) => store_failure("registration", err),
        }
    }

    fn login(&mut self, username: &str, password: &str) -> ShellAction {
        match self.auth.login(username, password) {
            Ok(Some(session)) => {
                self.session = Some(session);
                ShellAction::Reply(LOGIN_SUCCEEDED.to_string())
            }
            Ok(None) => ShellAction::Reply(LOGIN_FAILED.to_string()),
            Err(err) => store_failure("login", err),
        }
    }
}

/// Split off the first whitespace-delimited word; the remainder keeps its spacing.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(end) => (&s[..end], &s[end..]),
        None => (s, ""),
    }
}

fn store_failure(action: &str, err: AuthError) -> ShellAction {
    match err {
        AuthError::Domain(err) => ShellAction::Reply(format!("Cannot complete {action}: {err}.")),
        err => {
            tracing::error!(error = %err, action, "credential store failure");
            ShellAction::Reply("Account service unavailable.".to_string())
        }
    }
}
