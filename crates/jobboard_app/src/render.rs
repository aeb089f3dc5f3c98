use jobboard_core::{JobRowView, JobsViewModel, MemoryUrlStore, UrlStore};

/// Prints one frame: status, rows, the active filter and the share link.
pub fn print_frame(view: &JobsViewModel, url_store: &MemoryUrlStore) {
    println!();
    if view.loading {
        println!("Loading...");
    } else if let Some(error) = &view.error {
        println!("{error} (type /retry to try again)");
    } else if view.jobs.is_empty() {
        println!("0 jobs found");
        println!("  No jobs match the current filter.");
    } else {
        println!("{} jobs found", view.total_count);
        for row in &view.jobs {
            println!("{}", format_row(row));
        }
    }

    println!(
        "filter: query={:?} remote-only={}",
        view.query, view.remote_only
    );
    let share = url_store.query_string();
    if !share.is_empty() {
        println!("share: ?{share}");
    }
}

fn format_row(row: &JobRowView) -> String {
    let mut line = format!("  {} | {} | {}", row.title, row.company, row.location);
    if row.is_remote_us {
        line.push_str(" [Remote US]");
    }
    if !row.salary_label.is_empty() {
        line.push_str(" | ");
        line.push_str(&row.salary_label);
    }
    if !row.tags.is_empty() {
        line.push_str(" | ");
        line.push_str(&row.tags.join(", "));
    }
    line.push_str(" | ");
    line.push_str(&row.url);
    line
}
