use anyhow::Context;
use cascadecipher::cipher;
use std::io;
use std::io::{BufReader, BufWriter, Read, Write};

fn read_stdin() -> Result<String, io::Error> {
    let mut reader = BufReader::new(std::io::stdin());

    let mut output = String::new();
    reader.read_to_string(&mut output)?;

    Ok(output)
}

/// Strips the trailing line ending (LF or CRLF) and uppercases; the cipher
/// expects uppercase and rejects control characters.
fn normalize_input(text: &str) -> String {
    text.trim_end_matches(['\n', '\r']).to_uppercase()
}

fn run_cipher(args: &clap::ArgMatches, decrypt: bool) -> anyhow::Result<()> {
    let text = match args.get_one::<String>("text") {
        None => read_stdin()?,
        Some(text) => {
            if text == "-" {
                read_stdin()?
            } else {
                text.clone()
            }
        }
    };
    let text = normalize_input(&text);

    let key = args
        .get_one::<String>("key")
        .cloned()
        .unwrap_or_default()
        .to_uppercase();
    let start_number = args.get_one::<i64>("start-number").copied().unwrap_or(1);
    let reverse_groups = args
        .get_one::<bool>("reverse-groups")
        .copied()
        .unwrap_or(false);

    let result = if decrypt {
        cipher::decode(&text, &key, start_number, reverse_groups)
            .map_err(Into::<anyhow::Error>::into)
            .context("unable to decrypt input")?
    } else {
        cipher::encode(&text, &key, start_number, reverse_groups)
            .map_err(Into::<anyhow::Error>::into)
            .context("unable to encrypt input")?
    };

    let mut writer = BufWriter::new(std::io::stdout());
    writer.write_all(result.as_bytes())?;
    writer.write_all(b"\n")?;

    Ok(())
}

fn cipher_command(name: &'static str, about: &'static str) -> clap::Command {
    clap::Command::new(name)
        .about(about)
        .arg(
            clap::Arg::new("text")
                .help("The input text, or - to read from stdin")
                .action(clap::ArgAction::Set)
                .default_value("-")
                .value_name("TEXT"),
        )
        .arg(
            clap::Arg::new("key")
                .help("Cipher key, letters only, at least 3 characters")
                .short('k')
                .long("key")
                .required(true)
                .action(clap::ArgAction::Set),
        )
        .arg(
            clap::Arg::new("start-number")
                .help("Seed for the chaining value")
                .short('s')
                .long("start-number")
                .value_parser(clap::value_parser!(i64))
                .allow_negative_numbers(true)
                .default_value("1")
                .action(clap::ArgAction::Set),
        )
        .arg(
            clap::Arg::new("reverse-groups")
                .help("Pad to five-letter groups and reverse each group")
                .short('r')
                .long("reverse-groups")
                .action(clap::ArgAction::SetTrue),
        )
}

fn main() -> anyhow::Result<()> {
    let root_command = clap::Command::new("casc")
        .version(clap::crate_version!())
        .about("Cascade cipher encryption and decryption tool")
        .subcommand_required(true)
        .subcommand(cipher_command(
            "encrypt",
            "Encrypt a message with the cascade cipher",
        ))
        .subcommand(cipher_command(
            "decrypt",
            "Decrypt a cascade cipher message",
        ));

    let matches = root_command.get_matches();

    match matches.subcommand() {
        Some(("encrypt", sub_matches)) => {
            if let Err(err) = run_cipher(sub_matches, false) {
                println!("unable to encrypt, got err {}", err);
                std::process::exit(1);
            }
        }
        Some(("decrypt", sub_matches)) => {
            if let Err(err) = run_cipher(sub_matches, true) {
                println!("unable to decrypt, got err {}", err);
                std::process::exit(1);
            }
        }
        _ => unreachable!("should never happen because of subcommand_required"),
    }

    Ok(())
}
