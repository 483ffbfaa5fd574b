use indicatif::{ProgressBar, ProgressStyle};

use crate::utils::consts::SESSION_SAMPLES;

pub fn print_banner() {
    eprintln!("physlink-rs");
}

/// Progress bar over the sample reads of one decode session.
pub fn session_progress() -> ProgressBar {
    let pb = ProgressBar::new(SESSION_SAMPLES as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("RECV [{bar:30.blue}] {percent}% ({pos}/{len} samples)")
            .unwrap()
            .progress_chars("█▉▊▋▌▍▎▏ "),
    );
    pb
}
