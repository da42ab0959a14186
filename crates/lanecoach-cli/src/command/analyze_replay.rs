//! Recorded-timeline analysis command.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Args;
use lanecoach_core::{Frame, GamePhase, ParticipantId, TeamRoster};
use lanecoach_replay::{ReplayReport, analyze_timeline};
use serde::Serialize;

use crate::util::{self, Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct AnalyzeReplayArg {
    /// Path to the timeline JSON file (array of frames)
    pub timeline: PathBuf,

    /// Blue-side participant ids (comma-separated)
    #[arg(long, value_delimiter = ',', default_values_t = [1, 2, 3, 4, 5])]
    pub blue: Vec<u8>,

    /// Red-side participant ids (comma-separated)
    #[arg(long, value_delimiter = ',', default_values_t = [6, 7, 8, 9, 10])]
    pub red: Vec<u8>,

    /// Write the full report as pretty JSON to this path (`-` for stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// JSON envelope written with `--output`.
#[derive(Debug, Serialize)]
struct ReportEnvelope {
    generated_at: DateTime<Utc>,
    report: ReplayReport,
}

pub(crate) fn run(arg: &AnalyzeReplayArg) -> anyhow::Result<()> {
    let frames: Vec<Frame> = util::read_json_file("timeline", &arg.timeline)?;
    let blue: Vec<ParticipantId> = arg.blue.iter().copied().map(ParticipantId).collect();
    let red: Vec<ParticipantId> = arg.red.iter().copied().map(ParticipantId).collect();
    let roster = TeamRoster::from_teams(&blue, &red)?;

    let report = analyze_timeline(&frames, &roster);
    print_report(&report, frames.len());

    if let Some(path) = &arg.output {
        let mut output = Output::from_output_path(path.clone())?;
        output.write_json(&ReportEnvelope {
            generated_at: Utc::now(),
            report,
        })?;
        eprintln!("Report written to {}", output.display_path());
    }
    Ok(())
}

fn print_report(report: &ReplayReport, frame_count: usize) {
    println!("Replay Analysis Report ({frame_count} frames)");
    println!("==========================================\n");

    println!("Roaming events: {}", report.roaming.len());
    for event in &report.roaming {
        println!(
            "  {:>4}:{:02}  p{}  {} -> {}  (level {}, vision {:.1})",
            event.timestamp_secs / 60,
            event.timestamp_secs % 60,
            event.participant,
            event.from_zone,
            event.to_zone,
            event.level,
            event.vision_score
        );
    }

    println!("\nPositioning safety (mean, 0-10):");
    for phase in [GamePhase::Early, GamePhase::Mid, GamePhase::Late] {
        match report.positioning.mean_for(phase) {
            Some(mean) => println!("  {:<6} {mean:.2}", phase.to_string()),
            None => println!("  {:<6} (no frames)", phase.to_string()),
        }
    }

    println!("\nFarming:");
    println!("  cs/min     {:.2}", report.farming.avg_cs_per_min());
    println!("  efficiency {:.1}%", report.farming.avg_efficiency());

    println!("\nObjective control:");
    print_bucket("dragons", &report.objectives.dragons);
    print_bucket("heralds", &report.objectives.heralds);
    print_bucket("barons", &report.objectives.barons);
    print_bucket("towers", &report.objectives.towers);
}

fn print_bucket(label: &str, timestamps: &[u32]) {
    let formatted: Vec<String> = timestamps
        .iter()
        .map(|t| format!("{}:{:02}", t / 60, t % 60))
        .collect();
    println!("  {:<8} {}", label, formatted.join(", "));
}
