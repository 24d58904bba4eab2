//! Console status lines.

use colored::{Color, Colorize};

use crate::ledger::{BalanceOutcome, UNIT_LABEL};
use crate::scan::report::{AttemptOutcome, AttemptReport};

fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.color(color).to_string()
    } else {
        text.to_string()
    }
}

/// Balance column text for an outcome.
pub fn balance_text(balance: &BalanceOutcome) -> String {
    match balance {
        BalanceOutcome::Amount(amount) => format!("{} {}", amount, UNIT_LABEL),
        BalanceOutcome::Zero => format!("0.0 {}", UNIT_LABEL),
        BalanceOutcome::InvalidAddress => "Invalid Address".to_string(),
        BalanceOutcome::TransientError(detail) => format!("Error ({})", detail),
    }
}

/// One status line for an attempt, without trailing newline.
pub fn status_line(report: &AttemptReport, color: bool) -> String {
    let sequence = paint(&format!("#{}", report.sequence), Color::Cyan, color);

    match &report.outcome {
        AttemptOutcome::Probed {
            private_key,
            address,
            balance,
        } => {
            let value = match balance {
                BalanceOutcome::InvalidAddress | BalanceOutcome::TransientError(_) => {
                    paint(&balance_text(balance), Color::Red, color)
                }
                _ => balance_text(balance),
            };
            format!(
                "{} | {} {} | {} {} | {} {}",
                sequence,
                paint("Private:", Color::Yellow, color),
                private_key.to_hex(),
                paint("Address:", Color::Green, color),
                address,
                paint("Balance:", Color::Magenta, color),
                value,
            )
        }
        AttemptOutcome::Aborted(error) => format!(
            "{} | {}",
            sequence,
            paint(&format!("attempt aborted: {}", error), Color::Red, color)
        ),
    }
}

/// Banner printed after a funded status line.
pub fn funds_found_line(color: bool) -> String {
    paint("!!! FUNDS FOUND !!!", Color::Green, color)
}
