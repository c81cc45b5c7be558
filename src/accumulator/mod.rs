//! Input accumulator - builds the expression buffer from keypad tokens.
//!
//! # Rules
//!
//! - A fresh session (after reset or a commit) replaces the buffer with the
//!   next digit, `.` or `)`; operators and `(` continue from the buffer.
//! - A buffer of exactly `"0"` is replaced by any token except `.`.
//! - Otherwise the token is validated against [`validate_token`] and
//!   silently dropped if it fails.
//!
//! Grouping balance is not enforced while typing; the evaluator checks it at
//! commit time.
//!
//! # Example
//!
//! ```
//! use calcpad::accumulator::Session;
//! use calcpad::token::Token;
//!
//! let mut session = Session::new();
//! for ch in "5*3".chars() {
//!     session.append_token(Token::from_char(ch).unwrap());
//! }
//! assert_eq!(session.preview_text(), "= 15");
//!
//! session.commit().unwrap();
//! assert_eq!(session.current_input, "15");
//! assert_eq!(session.history_label(), "5*3 = 15");
//! ```

mod constraints;
mod state;

pub use constraints::{trailing_number, validate_token, TokenRejection};
pub use state::{HistoryEntry, Session, NO_HISTORY, RESET_INPUT};
