use std::process;

use clap::Parser;
use producthunt_posts::cli::ProductHuntPosts;

fn main() {
    let app = ProductHuntPosts::parse();
    timber::init(app.log_level.map(timber::Level::from));
    tracing::trace!(command_structure = ?app);

    if let Err(error) = app.run() {
        tracing::debug!(?error);
        // nothing else to do if stderr is gone
        let _ = error.print();
        process::exit(1)
    } else {
        process::exit(0)
    }
}
