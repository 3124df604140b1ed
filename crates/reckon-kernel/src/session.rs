//! Session — the interactive calculator as an explicit state machine.
//!
//! A front-end asks the session for its current [`prompt`](Session::prompt),
//! reads one line, and hands it to [`process_line`](Session::process_line).
//! The session answers with the [`Output`]s to show and moves to its next
//! [`Phase`]. Invalid input never advances the phase; it only produces a
//! diagnostic and the same prompt comes back.
//!
//! ```text
//! SelectOperation ──op──▶ FirstOperand ──a──▶ SecondOperand ──b──▶ Continuation
//!        ▲  (carried result skips FirstOperand)                       │
//!        └───────────────────────── y / n ────────────────────────────┤
//!                                                          quit       ▼
//!                                                                  Finished
//! ```
//!
//! A logarithm domain error also ends in `Finished`.

use std::fmt;
use std::mem;
use std::str::FromStr;

use tracing::{debug, info, warn};

use crate::engine::Operator;
use crate::error::{DomainError, UnknownChoice};
use crate::format::format_number;

/// Printed when the session ends.
pub const FAREWELL: &str = "Thank you for trying out the calculator app. Have a great day!";

const NOT_A_NUMBER: &str = "Please enter a NUMBER and not any other input";
const INVALID_CHOICE: &str = "Please enter a valid choice";

/// Where the session is, and what it has collected so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Waiting for an operator token. `carried` is the previous result when
    /// the user chose to keep calculating with it.
    SelectOperation { carried: Option<f64> },
    /// Waiting for the first operand.
    FirstOperand { operator: Operator },
    /// Waiting for the second operand.
    SecondOperand { operator: Operator, first: f64 },
    /// A result is on screen; waiting for `y`, `n` or `quit`.
    Continuation { result: f64 },
    /// The session is over.
    Finished,
}

impl Phase {
    /// True when both phases are the same step of the machine, whatever
    /// values they carry. NaN results compare equal here.
    pub fn same_step(&self, other: &Phase) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }
}

/// What to do after a result is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// `y`: keep calculating with the result as the first operand.
    Continue,
    /// `n`: start over with nothing carried.
    Restart,
    /// `quit`: end the session.
    Quit,
}

impl FromStr for Choice {
    type Err = UnknownChoice;

    /// Case-insensitive, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "y" => Ok(Choice::Continue),
            "n" => Ok(Choice::Restart),
            "quit" => Ok(Choice::Quit),
            _ => Err(UnknownChoice(s.to_string())),
        }
    }
}

/// Something the session wants shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// The list of operator tokens, one per line.
    Menu,
    /// A completed calculation, e.g. `2.0 + 3.0 = 5.0`.
    Calculation(String),
    /// A recoverable input problem; the prompt repeats.
    Diagnostic(String),
    /// An operation left its domain and the session is ending.
    DomainError(DomainError),
    /// Goodbye message.
    Farewell,
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Menu => {
                let tokens: Vec<&str> = Operator::ALL.iter().map(|op| op.token()).collect();
                f.write_str(&tokens.join("\n"))
            }
            Output::Calculation(text) | Output::Diagnostic(text) => f.write_str(text),
            Output::DomainError(err) => write!(f, "{err}"),
            Output::Farewell => f.write_str(FAREWELL),
        }
    }
}

/// The operator list as shown in the invalid-operation diagnostic.
fn valid_operations() -> String {
    let quoted: Vec<String> = Operator::ALL
        .iter()
        .map(|op| format!("'{}'", op.token()))
        .collect();
    format!("[{}]", quoted.join(", "))
}

/// Parse an operand, ignoring surrounding whitespace.
pub fn parse_operand(input: &str) -> Option<f64> {
    input.trim().parse().ok()
}

/// Render a finished calculation.
fn describe(operator: Operator, a: f64, b: f64, result: f64) -> String {
    let (a, b, result) = (format_number(a), format_number(b), format_number(result));
    match operator {
        Operator::Logarithm => format!("log base {a} of {b} = {result}"),
        _ => format!("{a} {operator} {b} = {result}"),
    }
}

/// One interactive calculator session.
#[derive(Debug, Clone)]
pub struct Session {
    phase: Phase,
}

impl Session {
    /// Start a fresh session, waiting for an operator.
    pub fn new() -> Self {
        info!("session started");
        Self {
            phase: Phase::SelectOperation { carried: None },
        }
    }

    /// What to show before the first prompt.
    pub fn intro(&self) -> Vec<Output> {
        vec![Output::Menu]
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once the user quit or a domain error ended the session.
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// The prompt to display for the current phase.
    pub fn prompt(&self) -> String {
        match self.phase {
            Phase::SelectOperation { .. } => "Please enter an operation: ".to_string(),
            Phase::FirstOperand { .. } => "Please enter the first number: ".to_string(),
            Phase::SecondOperand { .. } => "Please enter the second number: ".to_string(),
            Phase::Continuation { result } => format!(
                "Type 'y' to continue calculating with {} or type 'n' to start a new calculation or type 'quit' to exit: ",
                format_number(result)
            ),
            Phase::Finished => String::new(),
        }
    }

    /// Feed one line of user input.
    pub fn process_line(&mut self, line: &str) -> Vec<Output> {
        let input = line.trim();
        let (next, outputs) = match self.phase {
            Phase::SelectOperation { carried } => Self::select_operation(input, carried),
            Phase::FirstOperand { operator } => match parse_operand(input) {
                Some(first) => (Phase::SecondOperand { operator, first }, Vec::new()),
                None => (self.phase, vec![Output::Diagnostic(NOT_A_NUMBER.to_string())]),
            },
            Phase::SecondOperand { operator, first } => match parse_operand(input) {
                Some(second) => Self::compute(operator, first, second),
                None => (self.phase, vec![Output::Diagnostic(NOT_A_NUMBER.to_string())]),
            },
            Phase::Continuation { result } => Self::continuation(input, result),
            Phase::Finished => (Phase::Finished, Vec::new()),
        };
        self.transition(next);
        outputs
    }

    /// Input ran out (EOF). Ends the session politely.
    pub fn end_of_input(&mut self) -> Vec<Output> {
        if self.is_finished() {
            return Vec::new();
        }
        self.transition(Phase::Finished);
        vec![Output::Farewell]
    }

    fn transition(&mut self, next: Phase) {
        if !next.same_step(&self.phase) {
            debug!(from = ?self.phase, to = ?next, "phase transition");
            if next == Phase::Finished {
                info!("session finished");
            }
        }
        self.phase = next;
    }

    fn select_operation(input: &str, carried: Option<f64>) -> (Phase, Vec<Output>) {
        match Operator::from_token(input) {
            Some(operator) => {
                let next = match carried {
                    Some(first) => Phase::SecondOperand { operator, first },
                    None => Phase::FirstOperand { operator },
                };
                (next, Vec::new())
            }
            None => (
                Phase::SelectOperation { carried },
                vec![Output::Diagnostic(format!(
                    "Please enter one of these valid operations: {}",
                    valid_operations()
                ))],
            ),
        }
    }

    fn compute(operator: Operator, first: f64, second: f64) -> (Phase, Vec<Output>) {
        // A zero divisor is discarded and asked for again.
        if operator == Operator::Divide && second == 0.0 {
            return (
                Phase::SecondOperand { operator, first },
                vec![Output::Diagnostic(DomainError::DivisionByZero.to_string())],
            );
        }
        match operator.apply(first, second) {
            Ok(result) => (
                Phase::Continuation { result },
                vec![Output::Calculation(describe(operator, first, second, result))],
            ),
            Err(err) => {
                warn!(operator = operator.token(), first, second, %err, "calculation failed");
                (Phase::Finished, vec![Output::DomainError(err), Output::Farewell])
            }
        }
    }

    fn continuation(input: &str, result: f64) -> (Phase, Vec<Output>) {
        match input.parse::<Choice>() {
            Ok(Choice::Quit) => (Phase::Finished, vec![Output::Farewell]),
            Ok(Choice::Continue) => (
                Phase::SelectOperation {
                    carried: Some(result),
                },
                vec![Output::Menu],
            ),
            Ok(Choice::Restart) => (Phase::SelectOperation { carried: None }, vec![Output::Menu]),
            Err(_) => (
                Phase::Continuation { result },
                vec![Output::Diagnostic(INVALID_CHOICE.to_string())],
            ),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
