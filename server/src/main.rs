use clap::Parser;
use todo_relay_lib::{run, ServerConfig};

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    if let Err(e) = rolling_logger::init_logger(&config.log_dir, "TodoRelay") {
        eprintln!("[{}] Failed to init logger: {}", chrono::Local::now().format("%H:%M:%S%.3f"), e);
    }

    if let Err(e) = run(config).await {
        let _ = rolling_logger::error(&format!("Server stopped: {}", e));
        eprintln!("[{}] Server stopped: {}", chrono::Local::now().format("%H:%M:%S%.3f"), e);
        std::process::exit(1);
    }
}
