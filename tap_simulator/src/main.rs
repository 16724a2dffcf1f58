use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use reqwest::Client;
use std::io::Write;
use std::time::Duration;
use tap_simulator::{Input, TapPayload, parse_input};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

#[derive(Parser, Debug)]
#[command(version, about = "Posts simulated reader taps to the attendance service")]
struct Args {
    /// Tap endpoint
    #[arg(long, default_value = "http://localhost:5000/api/tap")]
    url: String,
    /// Reader identifier; prompted for when omitted
    #[arg(long)]
    reader: Option<String>,
}

fn prompt(text: &str) {
    print!("{text}");
    std::io::stdout().flush().ok();
}

async fn read_reader(lines: &mut Lines<BufReader<Stdin>>) -> Result<String> {
    loop {
        prompt("Reader ID: ");
        let Some(line) = lines.next_line().await? else {
            anyhow::bail!("stdin closed before a reader ID was given");
        };
        let line = line.trim();
        if !line.is_empty() {
            return Ok(line.to_owned());
        }
    }
}

async fn send_tap(client: &Client, url: &str, payload: &TapPayload) -> Result<String> {
    let response = client
        .post(url)
        .json(payload)
        .send()
        .await
        .with_context(|| format!("POST {url}"))?;
    let status = response.status();
    let body = response.text().await.context("reading response body")?;
    Ok(format!("{status} {body}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = Client::builder().timeout(Duration::from_secs(5)).build()?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let reader_id = match args.reader {
        Some(r) => r,
        None => read_reader(&mut lines).await?,
    };
    println!("Simulating reader {reader_id} against {}. Type 'exit' to quit.", args.url);

    loop {
        prompt("Credential: ");
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let credential = match parse_input(&line) {
            Input::Exit => break,
            Input::Skip => continue,
            Input::Credential(c) => c,
        };

        let payload = TapPayload::new(credential, &reader_id, Local::now().naive_local());
        match send_tap(&client, &args.url, &payload).await {
            Ok(reply) => println!("{reply}"),
            Err(e) => eprintln!("Tap failed: {e:#}"),
        }
        tokio::time::sleep(Duration::from_millis(500)).await;
    }

    Ok(())
}
