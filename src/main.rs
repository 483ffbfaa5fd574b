use std::io;
use std::net::TcpStream;
use std::process::ExitCode;

use clap::Parser;
use indicatif::ProgressBar;
use tracing::{error, info, warn};

use physlink_rs::channel::{Channel, MemoryChannel, StreamChannel};
use physlink_rs::error::DecodeError;
use physlink_rs::phy::{DecodeReport, SYMBOL_TABLE, SessionDecoder, encoder};
use physlink_rs::ui;
use physlink_rs::utils::consts::{DEFAULT_HOST, DEFAULT_PORT, PAYLOAD_BYTES};
use physlink_rs::utils::logging::init_logging;

#[derive(Parser)]
#[command(name = "physlink", about = "Physical-layer decode client")]
struct Args {
    /// Server host
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Server port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Print the decode report as JSON instead of hex
    #[arg(long)]
    json: bool,

    /// Decode a locally simulated transmission instead of dialing out
    #[arg(long)]
    loopback: bool,
}

/// Ticks the session progress bar once per sample read.
struct ProgressChannel<C> {
    inner: C,
    bar: ProgressBar,
}

impl<C: Channel> Channel for ProgressChannel<C> {
    fn read_sample(&mut self) -> io::Result<Option<u8>> {
        let sample = self.inner.read_sample()?;
        if sample.is_some() {
            self.bar.inc(1);
        }
        Ok(sample)
    }

    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.inner.write_byte(byte)
    }
}

fn main() -> ExitCode {
    init_logging();
    ui::print_banner();
    let args = Args::parse();

    let result = if args.loopback {
        run_loopback(&args)
    } else {
        run_client(&args)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("session failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_client(args: &Args) -> Result<(), DecodeError> {
    let stream = TcpStream::connect((args.host.as_str(), args.port))?;
    info!("Connected to server.");

    let mut channel = ProgressChannel {
        inner: StreamChannel::new(stream),
        bar: ui::session_progress(),
    };
    let report = SessionDecoder::new(&SYMBOL_TABLE).decode(&mut channel)?;
    channel.bar.finish_and_clear();

    info!("Baseline established from preamble: {:.2}", report.baseline);
    print_report(&report, args.json)?;

    // Echo the payload, one write per byte, then read the verdict:
    // exactly one reply byte, 1 means accepted.
    for &byte in &report.payload {
        channel.write_byte(byte)?;
    }
    match channel.read_sample()? {
        Some(1) => info!("Response good."),
        _ => warn!("Response bad."),
    }

    info!("Disconnected from server.");
    Ok(())
}

/// Offline session against a simulated transmitter, mostly useful for
/// eyeballing output formatting without a live server.
fn run_loopback(args: &Args) -> Result<(), DecodeError> {
    let payload: Vec<u8> =
        (0..PAYLOAD_BYTES as u8).map(|i| i.wrapping_mul(0x11)).collect();
    let samples =
        encoder::simulate_transmission(&SYMBOL_TABLE, &payload, 100, 20);
    let mut channel = MemoryChannel::new(samples);

    let report = SessionDecoder::new(&SYMBOL_TABLE).decode(&mut channel)?;
    info!("Baseline established from preamble: {:.2}", report.baseline);
    print_report(&report, args.json)?;
    Ok(())
}

fn print_report(report: &DecodeReport, json: bool) -> Result<(), DecodeError> {
    if json {
        let rendered =
            serde_json::to_string_pretty(report).map_err(io::Error::from)?;
        println!("{rendered}");
    } else {
        let hex: String =
            report.payload.iter().map(|b| format!("{b:02X}")).collect();
        println!("Received {} bytes: {hex}", report.payload.len());
    }
    Ok(())
}
