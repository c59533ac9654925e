//! Subcommand handlers. Each prints a short human-readable report.

use crate::config::{CategoryAction, Command, ThemeAction};
use chrono::{Local, NaiveDate, Utc};
use expense_core::view::{category_name, format_amount};
use expense_core::{
    category_totals, export_expenses, export_file_name, import_expenses, summarize, time_series,
    visible_expenses, Category, CategoryPatch, ExpenseDraft, ExpenseFilter, ExpenseStore,
    KvRepository, ThemeStore, TimeRange,
};
use std::error::Error;
use std::path::Path;

type CommandResult = Result<(), Box<dyn Error>>;

pub fn dispatch<R: KvRepository>(
    command: Command,
    store: &mut ExpenseStore<R>,
    theme: &mut ThemeStore<R>,
) -> CommandResult {
    let today = Local::now().date_naive();
    match command {
        Command::Add {
            amount,
            category,
            date,
            description,
        } => {
            let draft = ExpenseDraft {
                amount,
                description,
                category,
                date: date.unwrap_or_else(|| today.format("%Y-%m-%d").to_string()),
            };
            let expense = draft.into_expense(Utc::now())?;
            let id = expense.id().unwrap_or_default().to_string();
            store.add_expense(expense)?;
            println!("Expense added: {id}");
        }
        Command::Delete { id } => {
            if store.delete_expense(&id)? {
                println!("Expense deleted: {id}");
            } else {
                println!("No expense with id {id}");
            }
        }
        Command::List { search, category } => list(store, ExpenseFilter::new(search, category)),
        Command::Stats => stats(store, today),
        Command::Breakdown => breakdown(store),
        Command::Chart { range } => chart(store, range, today),
        Command::Categories => {
            for category in store.categories() {
                println!("{:<16} {:<20} {}", category.id, category.name, category.color);
            }
        }
        Command::Category { action } => category(store, action)?,
        Command::Export { dir } => export(store, &dir, today)?,
        Command::Import { file } => {
            let text = std::fs::read_to_string(&file)?;
            let count = import_expenses(store, &text)?;
            println!("Imported {count} expenses");
        }
        Command::Clear { yes } => {
            if !yes {
                return Err("refusing to delete all expenses without --yes".into());
            }
            store.clear_all_expenses()?;
            println!("All expense data has been deleted");
        }
        Command::Theme { action } => match action.unwrap_or(ThemeAction::Show) {
            ThemeAction::Show => println!("{}", theme.theme()),
            ThemeAction::Toggle => println!("{}", theme.toggle_theme()?),
            ThemeAction::Set { theme: next } => {
                theme.set_theme(next)?;
                println!("{next}");
            }
        },
    }
    Ok(())
}

fn list<R: KvRepository>(store: &ExpenseStore<R>, filter: ExpenseFilter) {
    let visible = visible_expenses(store.expenses(), &filter);
    if visible.is_empty() {
        println!("No expenses found");
        return;
    }
    for expense in visible {
        let date = expense
            .date()
            .map_or_else(|| "----------".to_string(), |d| d.to_string());
        println!(
            "{date}  {:>10}  {:<16}  {}  [{}]",
            format_amount(expense.amount()),
            category_name(store.categories(), expense.category()),
            expense.description(),
            expense.id().unwrap_or("?"),
        );
    }
}

fn stats<R: KvRepository>(store: &ExpenseStore<R>, today: NaiveDate) {
    let summary = summarize(store.expenses(), today);
    println!(
        "Total:      {} across {} expenses",
        format_amount(summary.total),
        summary.count
    );
    println!(
        "This month: {} ({})",
        format_amount(summary.this_month),
        today.format("%B %Y")
    );
    println!("Average:    {}", format_amount(summary.average));
    println!("Largest:    {}", format_amount(summary.largest));
}

fn breakdown<R: KvRepository>(store: &ExpenseStore<R>) {
    let breakdown = category_totals(store.expenses(), store.categories());
    if breakdown.is_empty() {
        println!("No expense data to display");
        return;
    }
    for item in &breakdown.items {
        println!(
            "{:<20} {:>10}  {:>3.0}%  {}",
            item.name,
            format_amount(item.total),
            item.share_of(breakdown.total),
            item.color
        );
    }
}

fn chart<R: KvRepository>(store: &ExpenseStore<R>, range: TimeRange, today: NaiveDate) {
    const BAR_WIDTH: f64 = 40.0;
    let series = time_series(store.expenses(), range, today);
    let peak = series.iter().map(|b| b.amount).fold(0.0, f64::max);
    for bucket in series {
        let width = if peak > 0.0 {
            (bucket.amount / peak * BAR_WIDTH).round() as usize
        } else {
            0
        };
        println!(
            "{:<7} {:>10} {}",
            bucket.label,
            format_amount(bucket.amount),
            "#".repeat(width)
        );
    }
}

fn category<R: KvRepository>(store: &mut ExpenseStore<R>, action: CategoryAction) -> CommandResult {
    match action {
        CategoryAction::Add { id, name, color } => {
            if store.state().find_category(&id).is_some() {
                return Err(format!("category `{id}` already exists").into());
            }
            store.add_category(Category::new(id.clone(), name, color))?;
            println!("Category added: {id}");
        }
        CategoryAction::Update { id, name, color } => {
            let patch = CategoryPatch { name, color };
            if patch.is_empty() {
                return Err("nothing to update; pass --name and/or --color".into());
            }
            if store.update_category(&id, patch)? {
                println!("Category updated: {id}");
            } else {
                println!("No category with id {id}");
            }
        }
        CategoryAction::Delete { id } => {
            if store.delete_category(&id)? {
                println!("Category deleted: {id}");
            } else {
                println!("No category with id {id}");
            }
        }
    }
    Ok(())
}

fn export<R: KvRepository>(store: &ExpenseStore<R>, dir: &Path, today: NaiveDate) -> CommandResult {
    let payload = export_expenses(store.expenses())?;
    let path = dir.join(export_file_name(today));
    std::fs::write(&path, payload)?;
    println!("Exported {} expenses to {}", store.expenses().len(), path.display());
    Ok(())
}
