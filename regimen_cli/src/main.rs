use clap::{Parser, Subcommand};
use regimen_core::store::STORE_FILE;
use regimen_core::*;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "regimen")]
#[command(about = "30-day diet and workout plan tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the plan for a day (default: the furthest unlocked day)
    Show {
        /// Day to show (1..=30); locked days fall back to the unlocked one
        #[arg(long, value_parser = clap::value_parser!(Day).range(1..=TOTAL_DAYS as i64))]
        day: Option<Day>,

        /// View to show (diet or exercise)
        #[arg(long, default_value = "diet")]
        tab: Tab,
    },

    /// Mark a meal as done
    Done {
        /// Day to mark (default: the furthest unlocked day)
        #[arg(long, value_parser = clap::value_parser!(Day).range(1..=TOTAL_DAYS as i64))]
        day: Option<Day>,

        /// Meal slot (breakfast, snack, lunch, pre-workout, post-workout,
        /// dinner, bedtime)
        meal: MealKey,
    },

    /// Unmark a meal
    Undo {
        /// Day to unmark (default: the furthest unlocked day)
        #[arg(long, value_parser = clap::value_parser!(Day).range(1..=TOTAL_DAYS as i64))]
        day: Option<Day>,

        /// Meal slot
        meal: MealKey,
    },

    /// Show accomplished days and streak
    Progress,

    /// Show the 30-day master shopping list
    Shopping,

    /// Show the plan's advisory notes
    Notes,

    /// Interactive session (default)
    Session,
}

fn main() -> Result<()> {
    regimen_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let store_path = data_dir.join(STORE_FILE);

    match cli.command {
        Some(Commands::Show { day, tab }) => cmd_show(&store_path, day, tab),
        Some(Commands::Done { day, meal }) => cmd_set_meal(&store_path, day, meal, true),
        Some(Commands::Undo { day, meal }) => cmd_set_meal(&store_path, day, meal, false),
        Some(Commands::Progress) => cmd_progress(&store_path),
        Some(Commands::Shopping) => cmd_shopping(),
        Some(Commands::Notes) => cmd_notes(),
        Some(Commands::Session) | None => cmd_session(&store_path),
    }
}

// ============================================================================
// One-Shot Commands
// ============================================================================

fn cmd_show(store_path: &Path, day: Option<Day>, tab: Tab) -> Result<()> {
    let completion = CompletionMap::load(store_path);
    let progress = compute_progress(&completion, TOTAL_DAYS, meal_keys_for);
    let frontier = unlocked_up_to(progress.accomplished, TOTAL_DAYS);

    let day = match day {
        Some(requested) if can_select_day(requested, progress.accomplished, TOTAL_DAYS) => {
            requested
        }
        Some(requested) => {
            // Rejected selection: not an error, just fall back.
            println!(
                "Day {} is locked (unlocked up to day {}). Showing day {}.",
                requested, frontier, frontier
            );
            frontier
        }
        None => frontier,
    };

    display_progress(&progress);
    println!("Day {}", day);
    match tab {
        Tab::Diet => display_diet(plan_for(day), &completion, None),
        Tab::Exercise => display_exercise(plan_for(day)),
    }
    Ok(())
}

fn cmd_set_meal(store_path: &Path, day: Option<Day>, meal: MealKey, done: bool) -> Result<()> {
    let completion = CompletionMap::load(store_path);
    let progress = compute_progress(&completion, TOTAL_DAYS, meal_keys_for);
    let day = day.unwrap_or_else(|| unlocked_up_to(progress.accomplished, TOTAL_DAYS));

    let updated = completion.set_meal(day, meal, done);
    if let Err(e) = updated.save(store_path) {
        // Non-fatal: the mutation still happened in memory.
        tracing::warn!("Failed to persist completion record: {}", e);
    }

    println!(
        "{} {} on day {}.",
        if done { "Marked" } else { "Unmarked" },
        meal.label(),
        day
    );

    if is_fully_accomplished(&updated, day, &meal_keys_for(day)) {
        println!("✓ Day {} fully accomplished!", day);
    }

    display_progress(&compute_progress(&updated, TOTAL_DAYS, meal_keys_for));
    Ok(())
}

fn cmd_progress(store_path: &Path) -> Result<()> {
    let completion = CompletionMap::load(store_path);
    let progress = compute_progress(&completion, TOTAL_DAYS, meal_keys_for);
    display_progress(&progress);
    Ok(())
}

fn cmd_shopping() -> Result<()> {
    println!("\n30-Day Master Shopping List");
    println!("───────────────────────────");
    for item in master_shopping_list() {
        println!("  • {}", item);
    }
    println!();
    Ok(())
}

fn cmd_notes() -> Result<()> {
    println!("\nImportant Notes");
    println!("───────────────");
    for note in important_notes() {
        println!("  • {}", note);
    }
    println!();
    Ok(())
}

// ============================================================================
// Interactive Session
// ============================================================================

fn cmd_session(store_path: &Path) -> Result<()> {
    let mut ctx = SessionCtx::open(store_path);

    println!("30-day regimen session. Type 'help' for commands, 'quit' to exit.");
    display_progress(&ctx.session().progress());
    display_day(ctx.session());

    let stdin = io::stdin();
    loop {
        print!("day {}> ", ctx.session().current_day);
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF ends the session
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            continue;
        };

        match command.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,

            "help" | "?" => print_session_help(),

            "next" | "n" => {
                let before = ctx.session().current_day;
                let session = ctx.handle(Intent::AdvanceDay);
                if session.current_day == before {
                    println!("Day {} is not fully done yet.", before);
                } else {
                    display_day(session);
                }
            }

            "prev" | "p" => {
                let session = ctx.handle(Intent::RetreatDay);
                display_day(session);
            }

            "day" => match parts.get(1).and_then(|s| s.parse::<Day>().ok()) {
                Some(requested) if (1..=TOTAL_DAYS).contains(&requested) => {
                    let before = ctx.session().current_day;
                    let session = ctx.handle(Intent::SelectDay(requested));
                    if session.current_day == before && requested != before {
                        println!(
                            "Day {} is locked (unlocked up to day {}).",
                            requested,
                            session.unlocked_up_to()
                        );
                    } else {
                        display_day(session);
                    }
                }
                _ => println!("Usage: day <1..{}>", TOTAL_DAYS),
            },

            "tab" => {
                let tab = match parts.get(1).map(|s| s.parse::<Tab>()) {
                    Some(Ok(tab)) => tab,
                    Some(Err(e)) => {
                        println!("{}", e);
                        continue;
                    }
                    None => match ctx.session().active_tab {
                        Tab::Diet => Tab::Exercise,
                        Tab::Exercise => Tab::Diet,
                    },
                };
                let session = ctx.handle(Intent::ToggleTab(tab));
                display_day(session);
            }

            "done" | "undo" => {
                let done = command.eq_ignore_ascii_case("done");
                match parts.get(1).map(|s| s.parse::<MealKey>()) {
                    Some(Ok(meal)) => {
                        let day = ctx.session().current_day;
                        let session = ctx.handle(Intent::SetMealDone { day, meal, done });
                        println!(
                            "{} {} on day {}.",
                            if done { "Marked" } else { "Unmarked" },
                            meal.label(),
                            day
                        );
                        if is_fully_accomplished(&session.completion, day, &meal_keys_for(day)) {
                            println!("✓ Day {} fully accomplished!", day);
                        }
                    }
                    Some(Err(e)) => println!("{}", e),
                    None => println!("Usage: {} <meal>", command),
                }
            }

            "check" => {
                let parsed = (
                    parts.get(1).map(|s| s.parse::<MealKey>()),
                    parts.get(2).map(|s| s.parse::<ListKind>()),
                    parts.get(3).and_then(|s| s.parse::<usize>().ok()),
                );
                match parsed {
                    (Some(Ok(meal)), Some(Ok(list)), Some(ordinal)) if ordinal >= 1 => {
                        let plan = ctx.session().plan();
                        let items = plan
                            .diet
                            .get(&meal)
                            .map(|detail| detail.list(list))
                            .unwrap_or(&[]);
                        match checkable_index(items, ordinal) {
                            Some(index) => {
                                ctx.handle(Intent::ToggleChecklistItem { meal, list, index });
                                println!("Toggled item {} of {} / {}.", ordinal, meal, list.label());
                            }
                            None => println!("No item {} in that list.", ordinal),
                        }
                    }
                    _ => println!("Usage: check <meal> <make|how|shop> <item>"),
                }
            }

            "show" | "s" => display_day(ctx.session()),

            "progress" => display_progress(&ctx.session().progress()),

            other => println!("Unknown command '{}'. Type 'help' for commands.", other),
        }
    }

    Ok(())
}

fn print_session_help() {
    println!("Commands:");
    println!("  show                        redisplay the current day");
    println!("  next / prev                 move between days (next requires a full day)");
    println!("  day <n>                     jump to an unlocked day");
    println!("  tab [diet|exercise]         switch view");
    println!("  done <meal> / undo <meal>   mark a meal done or not done");
    println!("  check <meal> <list> <n>     tick a checklist line (list: make|how|shop)");
    println!("  progress                    show accomplished days and streak");
    println!("  quit                        end the session");
}

// ============================================================================
// Display Helpers
// ============================================================================

fn display_progress(progress: &Progress) {
    let filled = progress.accomplished as usize;
    let bar: String = "█".repeat(filled) + &"░".repeat(TOTAL_DAYS as usize - filled);
    println!();
    println!("  [{}]", bar);
    println!(
        "  Days Accomplished: {} / {}   Streak: {} days",
        progress.accomplished, TOTAL_DAYS, progress.streak
    );
    println!();
}

fn display_day(session: &Session) {
    let plan = session.plan();
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  DAY {:<2}                                 │", plan.day);
    println!("╰─────────────────────────────────────────╯");
    match session.active_tab {
        Tab::Diet => display_diet(plan, &session.completion, Some(&session.checklist)),
        Tab::Exercise => display_exercise(plan),
    }
}

fn display_diet(plan: &DayPlan, completion: &CompletionMap, checklist: Option<&ChecklistState>) {
    for (key, detail) in &plan.diet {
        let done = completion.get(plan.day, *key);
        println!(
            "  {} {} — {}",
            if done { "✓" } else { "·" },
            key.label(),
            detail.dish
        );
        for list in [ListKind::WhatToMake, ListKind::HowToMake, ListKind::ShopList] {
            println!("      {}:", list.label());
            display_list(detail.list(list), *key, list, checklist);
        }
        println!();
    }
}

fn display_list(
    items: &[PlanItem],
    meal: MealKey,
    list: ListKind,
    checklist: Option<&ChecklistState>,
) {
    let mut ordinal = 0;
    for (index, item) in items.iter().enumerate() {
        match item {
            PlanItem::Subtitle(text) => println!("        {}", text),
            PlanItem::Entry(text) => {
                ordinal += 1;
                let checked = checklist
                    .map(|c| c.is_checked(meal, list, index))
                    .unwrap_or(false);
                println!(
                    "        [{}] {:>2}. {}",
                    if checked { "x" } else { " " },
                    ordinal,
                    text
                );
            }
        }
    }
}

fn display_exercise(plan: &DayPlan) {
    let exercise = &plan.exercise;
    println!("  Focus: {}", exercise.focus);
    println!();
    println!("  Warm-up: {}", exercise.warm_up);
    println!();
    println!("  Workout:");
    for line in &exercise.workout {
        println!("    • {}", line);
    }
    println!();
    println!("  Cool-down: {}", exercise.cool_down);
    println!();
}

/// Map a 1-based checkable ordinal to the item's index within the list
///
/// Subtitles are not checkable and don't consume ordinals.
fn checkable_index(items: &[PlanItem], ordinal: usize) -> Option<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_checkable())
        .map(|(index, _)| index)
        .nth(ordinal - 1)
}
