//! Text rendering for the application views.
//!
//! Pure functions from routed view state to terminal text. No business
//! logic lives here; gate decisions and item filtering happen before a view
//! reaches this module.

use crate::app::View;
use crate::models::{CapturedItem, ItemKind, StrategyPlan, SubscriptionTier};
use crate::services::{AuditCheck, CheckStatus, Feature, can_access};
use chrono::{Local, TimeZone};
use std::fmt::Write as _;

/// Renders a routed view to terminal text.
#[must_use]
pub fn render(view: &View<'_>) -> String {
    match view {
        View::Dashboard {
            items,
            mode,
            tier,
            credits,
        } => render_dashboard(items, mode.label(), *tier, *credits),
        View::Strategist { tier } => render_strategist(*tier),
        View::Vault { items } => render_vault(items),
        View::Visualizer { tier } => render_visualizer(*tier),
        View::Subscription { tier } => render_subscription(*tier),
        View::Propagation { tier, item_count } => render_propagation(*tier, *item_count),
    }
}

/// Renders a completed strategy plan.
#[must_use]
pub fn render_plan(plan: &StrategyPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "CORE DIRECTIVE");
    let _ = writeln!(out, "  {}", plan.final_strategy);
    let _ = writeln!(out);
    let _ = writeln!(out, "GOAL");
    let _ = writeln!(out, "  {}", plan.goal_summary);
    let _ = writeln!(out);
    let _ = writeln!(out, "LOGIC CHAIN");
    for (i, step) in plan.reasoning_steps.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, step.thought);
        let _ = writeln!(out, "     {}", step.action);
    }
    if !plan.potential_risks.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "DEGRADATION RISKS");
        for risk in &plan.potential_risks {
            let _ = writeln!(out, "  - {risk}");
        }
    }
    out
}

/// Formats one audit check as a console line.
#[must_use]
pub fn format_audit_check(check: &AuditCheck) -> String {
    let marker = match check.status {
        CheckStatus::Pass => "PASS",
        CheckStatus::Fail => "FAIL",
        CheckStatus::Info => "INFO",
    };
    format!("[{marker}] {:<32} {}", check.name, check.detail)
}

fn render_dashboard(
    items: &[&CapturedItem],
    sector: &str,
    tier: SubscriptionTier,
    credits: Option<u32>,
) -> String {
    let total = items.len();
    let tasks = items.iter().filter(|i| i.kind == ItemKind::Task).count();
    let notes = items.iter().filter(|i| i.kind == ItemKind::Note).count();
    let habits = items.iter().filter(|i| i.kind == ItemKind::Habit).count();
    let efficiency = if total > 0 { tasks * 100 / total } else { 0 };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "SYSTEM DIAGNOSTIC // {} PROTOCOL // SECTOR {}",
        tier.as_str().to_uppercase(),
        sector.to_uppercase()
    );
    let _ = writeln!(out, "{}", Local::now().format("%H:%M // %A %b %d"));
    let _ = writeln!(out);
    let _ = writeln!(out, "throughput     {efficiency}% coherence ({tasks} directives / {total} nodes)");
    let _ = writeln!(out, "task load      {tasks}");
    let _ = writeln!(out, "note buffer    {notes}");
    let _ = writeln!(out, "habit loops    {habits}");
    match credits {
        Some(n) => {
            let _ = writeln!(out, "usage credits  {n} remaining");
        },
        None => {
            let _ = writeln!(out, "usage credits  unlimited");
        },
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "TELEMETRY LOG");
    if items.is_empty() {
        let _ = writeln!(out, "  log buffer empty");
    } else {
        for item in items {
            let _ = writeln!(
                out,
                "  [{:<7}] {} {}",
                item.kind.as_str(),
                format_clock(item.created_at),
                item.content
            );
        }
    }
    out
}

fn render_strategist(tier: SubscriptionTier) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "NEURAL ARCHITECT // EXECUTION MAPPING");
    if can_access(Feature::StrategyPlanning, tier) {
        let _ = writeln!(out, "  supply a goal and optional context to synthesize a directive:");
        let _ = writeln!(out, "  neuros plan --goal \"...\" --context \"...\"");
    } else {
        let _ = writeln!(out, "  strategy planning requires a pro or quantum plan");
        let _ = writeln!(out, "  see: neuros show subscription");
    }
    out
}

fn render_vault(items: &[CapturedItem]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "VAULT // {} NODES ARCHIVED", items.len());
    for kind in ItemKind::all() {
        let of_kind: Vec<&CapturedItem> = items.iter().filter(|i| i.kind == *kind).collect();
        if of_kind.is_empty() {
            continue;
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({})", kind.as_str().to_uppercase(), of_kind.len());
        for item in of_kind {
            let _ = writeln!(out, "  [{}] {}", item.category.as_str(), item.content);
        }
    }
    out
}

fn render_visualizer(tier: SubscriptionTier) -> String {
    let high_res = if can_access(Feature::HighResImaging, tier) {
        "unlocked"
    } else {
        "locked (pro)"
    };
    let video = if can_access(Feature::VideoSimulation, tier) {
        "unlocked"
    } else {
        "locked (quantum)"
    };

    let mut out = String::new();
    let _ = writeln!(out, "VISUAL ENGINE");
    let _ = writeln!(out, "  blueprint 1K      unrestricted");
    let _ = writeln!(out, "  blueprint 2K/4K   {high_res}");
    let _ = writeln!(out, "  motion simulation {video}");
    let _ = writeln!(out);
    let _ = writeln!(out, "  generate: neuros visualize \"...\" --resolution 1K");
    let _ = writeln!(out, "  simulate: neuros simulate \"...\"");
    out
}

fn render_subscription(tier: SubscriptionTier) -> String {
    struct PlanCard {
        tier: SubscriptionTier,
        name: &'static str,
        price: &'static str,
        features: [&'static str; 3],
    }

    let cards = [
        PlanCard {
            tier: SubscriptionTier::Basic,
            name: "SYNAPSE FREE",
            price: "$0",
            features: [
                "10 daily capture nodes",
                "1K visual resolution",
                "basic parsing",
            ],
        },
        PlanCard {
            tier: SubscriptionTier::Pro,
            name: "NEURAL PRO",
            price: "$29",
            features: [
                "unlimited capture nodes",
                "autonomous strategy builder",
                "4K visual imaging",
            ],
        },
        PlanCard {
            tier: SubscriptionTier::Quantum,
            name: "QUANTUM ENT.",
            price: "$199",
            features: [
                "full video simulations",
                "custom agent contexts",
                "dedicated compute",
            ],
        },
    ];

    let mut out = String::new();
    let _ = writeln!(out, "EXPANSION PROTOCOLS // SELECT YOUR TIER");
    for card in &cards {
        let marker = if card.tier == tier { "  << current" } else { "" };
        let _ = writeln!(out);
        let _ = writeln!(out, "{} {} / month{marker}", card.name, card.price);
        for feature in &card.features {
            let _ = writeln!(out, "  - {feature}");
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "upgrade with: neuros upgrade <basic|pro|quantum>");
    out
}

fn render_propagation(tier: SubscriptionTier, item_count: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "SYSTEM PROPAGATION // BINARY SYNTHESIS");
    let _ = writeln!(
        out,
        "  {} nodes staged on the {} tier",
        item_count,
        tier.as_str()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "  audit:    neuros propagate --audit-only");
    let _ = writeln!(out, "  playback: neuros propagate");
    let _ = writeln!(out);
    let _ = writeln!(out, "MANUAL OVERRIDE CONSOLE");
    for cmd in [
        "git init",
        "git add .",
        "git commit -m \"Neural OS: initial system propagation\"",
        "git branch -M main",
        "git push -u origin main",
    ] {
        let _ = writeln!(out, "  {cmd}");
    }
    out
}

/// Formats a Unix timestamp as a local wall-clock time.
fn format_clock(timestamp: u64) -> String {
    i64::try_from(timestamp)
        .ok()
        .and_then(|ts| Local.timestamp_opt(ts, 0).single())
        .map_or_else(|| "--:--".to_string(), |dt| dt.format("%H:%M").to_string())
}
