use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use textshard::cli::{
    decode_file, encode_file, inspect_shards, show_info, DecodeOptions, EncodeOptions,
};
use textshard::config::{CipherMode, Compression};

/// Version info from build.rs
const VERSION: &str = env!("TEXTSHARD_VERSION");
const BUILD: &str = env!("TEXTSHARD_BUILD");
const PROFILE: &str = env!("TEXTSHARD_PROFILE");
const GIT_HASH: &str = env!("TEXTSHARD_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH)
    })
}

#[derive(Parser)]
#[command(name = "textshard")]
#[command(author, about = "Turn a binary file into printable text shards and back", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a file into text shards
    #[command(alias = "e")]
    Encode {
        /// File to encode
        input: PathBuf,

        /// Base name for shard files, may include a directory
        #[arg(short, long, default_value = "shard")]
        output: String,

        /// Compression algorithm
        #[arg(short = 'a', long, default_value = "zstd", value_parser = parse_compression)]
        algorithm: Compression,

        /// Compression level, clamped to the algorithm's range
        #[arg(short, long, default_value = "9")]
        level: i32,

        /// Characters per shard; 0 writes everything as one shard
        #[arg(short, long, default_value = "3000")]
        shard_size: i64,

        /// Skip encryption
        #[arg(long)]
        no_encrypt: bool,

        /// Encryption key
        #[arg(short, long, default_value = "textshard")]
        key: String,

        /// AES-256 mode used to encrypt; decoding rediscovers it by trial
        #[arg(short = 'm', long, default_value = "ctr", value_parser = parse_cipher_mode)]
        cipher_mode: CipherMode,

        /// Report per-shard progress
        #[arg(short, long)]
        verbose: bool,
    },

    /// Rebuild the original file from text shards
    #[command(alias = "d")]
    Decode {
        /// Base name the shards were written under
        base: String,

        /// Output file for the restored bytes
        #[arg(short, long, default_value = "restored.bin")]
        output: PathBuf,

        /// Compression algorithm used at encode time
        #[arg(short = 'a', long, default_value = "zstd", value_parser = parse_compression)]
        algorithm: Compression,

        /// Skip decryption
        #[arg(long)]
        no_decrypt: bool,

        /// Decryption key
        #[arg(short, long, default_value = "textshard")]
        key: String,

        /// Report shard and character counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show information about a shard set
    #[command(alias = "i")]
    Info {
        /// Base name of the shard set
        base: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn parse_compression(s: &str) -> Result<Compression, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn parse_cipher_mode(s: &str) -> Result<CipherMode, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("textshard {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encode {
            input,
            output,
            algorithm,
            level,
            shard_size,
            no_encrypt,
            key,
            cipher_mode,
            verbose,
        } => {
            let options = EncodeOptions {
                output_base: output.clone(),
                compression: algorithm,
                level,
                shard_size,
                encrypt: !no_encrypt,
                key,
                cipher_mode,
            };

            let report = |written: usize, total: usize| {
                println!("Wrote {}/{} shards", written, total);
            };
            let progress: Option<&dyn Fn(usize, usize)> =
                if verbose { Some(&report) } else { None };

            match encode_file(&input, &options, progress) {
                Ok(summary) => {
                    if summary.small_input {
                        println!(
                            "Note: {} bytes is small enough that encryption is mostly overhead",
                            summary.original_size
                        );
                    }
                    println!("Encoded {} ({} bytes)", input.display(), summary.original_size);
                    println!("  SHA-256: {}", summary.sha256);
                    println!(
                        "  Encryption: {}",
                        if summary.encrypted { "on" } else { "off" }
                    );
                    println!("  Encoded characters: {}", summary.encoded_chars);
                    println!("  Shards: {} under base {}", summary.shard_count, output);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Decode {
            base,
            output,
            algorithm,
            no_decrypt,
            key,
            verbose,
        } => {
            let options = DecodeOptions {
                output: output.clone(),
                compression: algorithm,
                decrypt: !no_decrypt,
                key,
            };

            match decode_file(&base, &options) {
                Ok(summary) => {
                    if verbose {
                        println!(
                            "Joined {} shards, {} characters",
                            summary.shard_count, summary.encoded_chars
                        );
                    }
                    println!(
                        "Restored {} ({} bytes) from {} shards",
                        output.display(),
                        summary.restored_size,
                        summary.shard_count
                    );
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Info { base, json } => {
            if json {
                match inspect_shards(&base) {
                    Ok(info) => match serde_json::to_string_pretty(&info) {
                        Ok(text) => {
                            println!("{}", text);
                            Ok(())
                        }
                        Err(e) => Err(e.into()),
                    },
                    Err(e) => Err(e),
                }
            } else {
                match show_info(&base) {
                    Ok(text) => {
                        print!("{}", text);
                        Ok(())
                    }
                    Err(e) => Err(e),
                }
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
