//! Command line surface
//!
//! `login` and `register` subcommands stand in for the two triggerable
//! actions; their arguments form the fields the handlers read.

pub mod commands;
pub mod dispatch;

use crate::authentication::Notifier;

/// Notifier that prints each message on its own line of stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("{message}");
    }
}
