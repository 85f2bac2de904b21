use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("lexiscore")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Lexiscore Contributors")
        .about("Score web articles for sentiment and readability")
        .arg(clap::arg!([INPUT] "CSV file with URL_ID and URL columns").value_parser(clap::value_parser!(PathBuf)))
        .arg(
            clap::arg!(-o --output <FILE> "Report file")
                .value_name("FILE")
                .default_value("Output.csv")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Report format (csv, json)")
                .value_name("FORMAT")
                .value_parser(["csv", "json"]),
        )
        .arg(
            clap::arg!(--"data-dir" <DIR> "Directory holding StopWords/ and MasterDictionary/")
                .value_name("DIR")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            clap::arg!(--"text-dir" <DIR> "Directory receiving one <URL_ID>.txt per processed article")
                .value_name("DIR")
                .default_value("text_files")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(clap::arg!(--"no-text-files" "Do not write per-article text files"))
        .arg(clap::arg!(--"keep-stopwords" "Keep stopwords in the token sequence"))
        .arg(clap::arg!(--"no-lemmatize" "Skip lemmatization of tokens"))
        .arg(
            clap::arg!(--"content-selector" <SELECTOR> "CSS selector of the article body container")
                .value_name("SELECTOR")
                .default_value("div.td-post-content"),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"))
        .arg(
            clap::arg!(--completions <SHELL> "Generate shell completion script")
                .value_name("SHELL")
                .value_parser(["bash", "zsh", "fish", "powershell", "elvish"]),
        );

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "lexiscore", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "lexiscore", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "lexiscore", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "lexiscore", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
