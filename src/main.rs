use clap::Parser;

use maze_search::config::Config;

fn main() {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_max_level(config.log_filter())
        .with_writer(std::io::stderr)
        .init();

    let layout = match config.load_layout() {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("Failed to load layout: {}", e);
            std::process::exit(1);
        }
    };
    let agent = match config.agent() {
        Ok(agent) => agent,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if !config.quiet {
        println!(
            "Layout: {}x{}, {} food",
            layout.width(),
            layout.height(),
            layout.food_count()
        );
        println!("{}", layout);
    }

    match agent.plan(&layout) {
        Ok(report) => {
            if config.quiet {
                println!("{} {}", report.actions.len(), report.cost);
            } else {
                println!("=== RESULTS ===");
                print!("{}", report);
            }
            if config.show_path {
                println!("Path: {}", report.path_string());
            }
            if !report.solved {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Search failed: {}", e);
            std::process::exit(1);
        }
    }
}
