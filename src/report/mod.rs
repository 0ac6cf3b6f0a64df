//! Text rendering of match information.
//!
//! Nothing here feeds back into the simulation.

use std::fmt::Write;

use crate::core::{Side, SideMap};
use crate::engine::{BallZone, MatchReport, MinuteRecord, PhaseOutcome, StrengthSummary};

/// One line per team: `"Team A strength: ATT: 300, MID: 1200, DEF: 800"`.
pub fn strength_lines(names: &SideMap<String>, strengths: &SideMap<StrengthSummary>) -> String {
    let mut out = String::new();
    for side in Side::BOTH {
        let s = strengths[side];
        let _ = writeln!(
            out,
            "{} strength: ATT: {}, MID: {}, DEF: {}",
            names[side], s.attack, s.midfield, s.defense
        );
    }
    out
}

/// Commentary for a single minute.
pub fn minute_line(names: &SideMap<String>, record: &MinuteRecord) -> String {
    let mut out = format!("== minute {}' ==\n", record.minute);
    if record.zone == BallZone::Midfield {
        if let Some(holder) = record.holder {
            let _ = writeln!(out, "midfield battle, {} trying to attack", names[holder]);
        }
    }

    let _ = match &record.outcome {
        PhaseOutcome::Restart { winner } => writeln!(
            out,
            "midfield battle is a draw, {} win the restart",
            names[*winner]
        ),
        PhaseOutcome::Advance { side, totals } => writeln!(
            out,
            "{} won the battle, proceed to final third [{} vs {}]",
            names[*side], totals.home, totals.away
        ),
        PhaseOutcome::Turnover { to, totals } => writeln!(
            out,
            "{} steal the ball, back to midfield battle [{} vs {}]",
            names[*to], totals.home, totals.away
        ),
        PhaseOutcome::Goal {
            scorer,
            attack_total,
            defense_total,
        } => writeln!(
            out,
            "GOAL! {} scores! (attacking {} vs defending {})",
            names[*scorer], attack_total, defense_total
        ),
        PhaseOutcome::Defended {
            defender,
            attack_total,
            defense_total,
        } => writeln!(
            out,
            "{} defend successfully, back to midfield (attacking {} vs defending {})",
            names[*defender], attack_total, defense_total
        ),
    };
    out
}

/// Minute-by-minute commentary for a whole match.
pub fn commentary(report: &MatchReport) -> String {
    report
        .timeline
        .iter()
        .map(|record| minute_line(&report.names, record))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Final score, possession and attack counts.
pub fn final_summary(report: &MatchReport) -> String {
    let names = &report.names;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Final Score: {} {} - {} {}",
        names.home, report.goals.home, report.goals.away, names.away
    );
    let _ = writeln!(out, "Team Stats:");
    let _ = writeln!(
        out,
        "Ball Possession: {}% - {}% ({} - {})",
        report.possession_pct(Side::Home),
        report.possession_pct(Side::Away),
        report.possession_minutes.home,
        report.possession_minutes.away
    );
    let _ = writeln!(
        out,
        "Attack: {} - {}",
        report.attacks.home, report.attacks.away
    );
    out
}
