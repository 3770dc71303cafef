use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("postcraft")
        .version("0.1.0")
        .author("Postcraft Contributors")
        .about("Draft social-media posts with generative-text backends")
        .arg(
            clap::arg!(-t --topic <TOPIC> "Topic to write about (default: rotating suggestion)")
                .value_name("TOPIC"),
        )
        .arg(clap::arg!(-u --url <URL> "Article URL to summarize instead of a topic").value_name("URL"))
        .arg(clap::arg!(-i --industry <INDUSTRY> "Industry the post targets").value_name("INDUSTRY"))
        .arg(
            clap::arg!(--tone <TONE> "Tone of the post")
                .default_value("professional")
                .value_parser([
                    "professional",
                    "casual",
                    "enthusiastic",
                    "educational",
                    "inspirational",
                ]),
        )
        .arg(
            clap::arg!(-b --backend <BACKEND> "Backend to try first")
                .default_value("primary")
                .value_parser(["primary", "gemini", "secondary", "openrouter"]),
        )
        .arg(clap::arg!(--offline_fallback "Produce a canned local post when every backend fails"))
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "postcraft", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "postcraft", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "postcraft", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "postcraft", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
