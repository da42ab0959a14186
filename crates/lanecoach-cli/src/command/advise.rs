//! Snapshot advisory command.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Args;
use lanecoach_advisor::{
    Advisory, GameAdvisor,
    roam::{self, RoamContext, WaveTrend},
};
use lanecoach_core::Snapshot;
use serde::Serialize;

use crate::util::{self, Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct AdviseArg {
    /// Path to the snapshot JSON file
    pub snapshot: PathBuf,

    /// Write the full advisory as pretty JSON to this path (`-` for stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// JSON envelope written with `--output`.
#[derive(Debug, Serialize)]
struct AdvisoryEnvelope {
    generated_at: DateTime<Utc>,
    advisory: Advisory,
}

pub(crate) fn run(arg: &AdviseArg) -> anyhow::Result<()> {
    let snapshot: Snapshot = util::read_json_file("snapshot", &arg.snapshot)?;
    let advisory = GameAdvisor::default().advise(&snapshot);

    print_advisory(&advisory, snapshot.elapsed_secs);
    print_roam_hints(&snapshot, &advisory);

    if let Some(path) = &arg.output {
        let mut output = Output::from_output_path(path.clone())?;
        output.write_json(&AdvisoryEnvelope {
            generated_at: Utc::now(),
            advisory,
        })?;
        eprintln!("Advisory written to {}", output.display_path());
    }
    Ok(())
}

fn print_advisory(advisory: &Advisory, elapsed_secs: u32) {
    println!(
        "Advisory at {}:{:02} ({} game)",
        elapsed_secs / 60,
        elapsed_secs % 60,
        advisory.phase
    );
    println!("=====================================\n");

    if advisory.actions.is_empty() {
        println!("No action stands out - keep playing your lane.");
    } else {
        println!("Recommended actions:");
        for (rank, action) in advisory.actions.iter().enumerate() {
            println!(
                "  {}. [{:>2}] {:<10} {}",
                rank + 1,
                action.priority,
                action.kind.to_string(),
                action.reason
            );
        }
    }

    println!("\nJudgments:");
    println!(
        "  wave      deficit {:+.1}  - {}",
        advisory.wave.cs_deficit, advisory.wave.recommendation
    );
    println!(
        "  danger    level {:+}  - {}",
        advisory.danger.danger_level, advisory.danger.recommendation
    );
    println!(
        "  power     score {:+.1}  - {}",
        advisory.power.power_score, advisory.power.recommendation
    );
    match &advisory.objective.next_objective {
        Some(next) => println!(
            "  objective {} ({})  - {}",
            next.objective, next.timing, next.recommendation
        ),
        None => println!("  objective none pending"),
    }
    println!(
        "  vision    deficit {:+.1}  - {}",
        advisory.vision.vision_deficit, advisory.vision.recommendation
    );
}

fn print_roam_hints(snapshot: &Snapshot, advisory: &Advisory) {
    let wave_state = if advisory.wave.should_push {
        WaveTrend::Push
    } else if advisory.wave.should_freeze {
        WaveTrend::Freeze
    } else {
        WaveTrend::Unknown
    };
    let hints = roam::roam_hints(&RoamContext {
        level: snapshot.player.level,
        wave_state,
        // Summoner-ability state is not part of the snapshot feed.
        enemy_flash_available: None,
        elapsed_secs: snapshot.elapsed_secs,
    });
    if !hints.is_empty() {
        println!("\nRoam timing:");
        for hint in hints {
            println!("  - {hint}");
        }
    }
}
