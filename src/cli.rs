// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::process::exit;

use clap::Parser;
use quizcards_core::Fallible;
use tokio::spawn;

use crate::cmd::check::check_deck;
use crate::cmd::convert::convert;
use crate::cmd::serve::DECK_PATH;
use crate::cmd::serve::ServerConfig;
use crate::cmd::serve::start_server;
use crate::utils::wait_for_server;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Convert extracted quiz text into a JSON deck.
    Convert {
        /// A text file, or a directory whose `.txt` files are all converted.
        path: String,
        /// Where to write the deck when converting a single file. Use `-` for
        /// stdout. By default, the deck is written next to the input with a
        /// `.json` extension.
        #[arg(long)]
        output: Option<String>,
    },
    /// Check a JSON deck the way the viewer loads it.
    Check {
        /// Path to the deck.
        path: String,
    },
    /// Serve a JSON deck at the path the viewer loads it from.
    Serve {
        /// Path to the deck.
        path: String,
        /// The host address to bind to. Default is 127.0.0.1.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// The port to use for the web server. Default is 8000.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Whether to open the deck in the browser once the server is up. Default is true.
        #[arg(long)]
        open_browser: Option<bool>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Convert { path, output } => convert(path, output),
        Command::Check { path } => check_deck(path),
        Command::Serve {
            path,
            host,
            port,
            open_browser,
        } => {
            if open_browser.unwrap_or(true) {
                // Start a separate task to open the browser once the server is up.
                let browser_host = host.clone();
                spawn(async move {
                    match wait_for_server(&browser_host, port).await {
                        Ok(_) => {
                            let _ = open::that(format!("http://{browser_host}:{port}{DECK_PATH}"));
                        }
                        Err(e) => {
                            eprintln!("Failed to connect to server: {e}");
                            exit(-1)
                        }
                    }
                });
            }
            let config = ServerConfig { path, host, port };
            start_server(config).await
        }
    }
}
