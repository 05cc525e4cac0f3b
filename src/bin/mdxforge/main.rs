use std::fmt::{Display, Formatter};
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use spdlog::{info, warn};

use mdxforge::config::Config;
use mdxforge::content::front_matter::serialize_front_matter;
use mdxforge::content::mdx_renderer::{parse_document, render_document};
use mdxforge::content::Metadata;
use mdxforge::logger::configure_logger;
use mdxforge::slug::slug_from_title;
use mdxforge::util::os_helper::get_name;

use crate::config::open_config;

mod config;

const CFG_FILE_NAME: &str = "mdxforge.toml";

const PLACEHOLDER_BODY: &str = "<!-- Add your content here -->\n";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
enum Args {
    /// Create a new post skeleton
    New(NewArgs),
    /// Render a JSON content document to MDX
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct NewArgs {
    /// Title of the post
    #[arg(short, long)]
    title: String,

    /// Name of the author. If empty, OS user real name is being used
    #[arg(short, long)]
    author: Option<String>,

    /// Short description for the front matter
    #[arg(short, long, default_value = "")]
    description: String,

    /// Cover image path or URL
    #[arg(short, long, default_value = "")]
    image: String,

    /// Comma-separated tags
    #[arg(long, default_value = "")]
    tags: String,

    /// Mark the post as published
    #[arg(short, long)]
    published: bool,

    /// Post generation options
    #[arg(short, long, default_value_t = PostOutput::Stdout)]
    output: PostOutput,

    /// Config path
    #[arg(short, long)]
    config_path: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Path of the JSON content document
    #[arg(short, long)]
    source: PathBuf,

    /// Post generation options
    #[arg(short, long, default_value_t = PostOutput::Stdout)]
    output: PostOutput,

    /// Config path
    #[arg(short, long)]
    config_path: Option<PathBuf>,
}

#[derive(Clone, Debug, ValueEnum)]
enum PostOutput {
    /// Writes the post to the stdout
    Stdout,
    /// Writes the post to a <slug>.mdx file (posts without images)
    File,
    /// Writes the post to <slug>/index.mdx (posts with images)
    Dir,
}

impl Display for PostOutput {
    // clap renders default_value_t through Display, so this has to match
    // the ValueEnum names or the default becomes unparseable
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PostOutput::Stdout => "stdout",
            PostOutput::File => "file",
            PostOutput::Dir => "dir",
        };
        write!(f, "{}", name)
    }
}

fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

fn get_author(author: Option<String>, config: &Config) -> String {
    if let Some(author) = author {
        return author;
    }

    if let Some(author) = config.default_author() {
        return author;
    }

    get_name()
}

fn write_post(config: &Config, title: &str, post: &str, output: &PostOutput) -> Result<()> {
    match output {
        PostOutput::Stdout => {
            println!("{}", post);
        }
        PostOutput::File => {
            let slug = slug_from_title(title);
            if slug.is_empty() {
                bail!("Could not derive a file name from the title {:?}", title);
            }
            let file_path = config.paths.content_dir.join(format!("{}.mdx", slug));
            info!("Creating file {}", file_path.display());
            fs::create_dir_all(&config.paths.content_dir)?;
            fs::write(&file_path, post)?;
        }
        PostOutput::Dir => {
            let slug = slug_from_title(title);
            if slug.is_empty() {
                bail!("Could not derive a directory name from the title {:?}", title);
            }
            let post_dir = config.paths.content_dir.join(slug);
            let file_path = post_dir.join(format!("{}.mdx", config.index_base_name()));
            info!("Creating dir post {}", file_path.display());
            fs::create_dir_all(&post_dir)?;
            fs::write(&file_path, post)?;
        }
    };

    Ok(())
}

fn new_cmd(args: NewArgs) -> Result<()> {
    let config = open_config(args.config_path.clone())?;
    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    let today = Utc::now().format("%Y-%m-%d").to_string();
    let meta = Metadata {
        title: args.title.clone(),
        description: args.description,
        image: args.image,
        published_at: today.clone(),
        updated_at: today,
        author: get_author(args.author, &config),
        is_published: args.published,
        tags: split_tags(&args.tags),
    };

    let post = format!("{}\n{}", serialize_front_matter(&meta), PLACEHOLDER_BODY);
    write_post(&config, &meta.title, &post, &args.output)
}

fn render_cmd(args: RenderArgs) -> Result<()> {
    let config = open_config(args.config_path.clone())?;
    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    let json = fs::read_to_string(&args.source)
        .with_context(|| format!("Error reading content document {}", args.source.display()))?;
    let doc = parse_document(&json)?;
    let post = render_document(&doc)?;

    write_post(&config, &doc.meta.title, &post, &args.output)
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args {
        Args::New(args) => new_cmd(args),
        Args::Render(args) => render_cmd(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_defaults_to_stdout() {
        let args = Args::try_parse_from(["mdxforge", "new", "-t", "Hello World"]).unwrap();
        let Args::New(args) = args else {
            panic!("Expected the new subcommand");
        };
        assert!(matches!(args.output, PostOutput::Stdout));
    }

    #[test]
    fn test_output_display_matches_value_names() {
        assert_eq!(PostOutput::Stdout.to_string(), "stdout");
        assert_eq!(PostOutput::File.to_string(), "file");
        assert_eq!(PostOutput::Dir.to_string(), "dir");
    }

    #[test]
    fn test_split_tags() {
        let tags = split_tags("rust, tooling , ,cli");
        assert_eq!(tags, vec!["rust", "tooling", "cli"]);

        let tags = split_tags("");
        assert!(tags.is_empty());
    }

    #[test]
    fn test_skeleton_post() {
        let meta = Metadata {
            title: "This is a title".to_string(),
            description: "".to_string(),
            image: "".to_string(),
            published_at: "2024-02-27".to_string(),
            updated_at: "2024-02-27".to_string(),
            author: "Thiago".to_string(),
            is_published: false,
            tags: vec![],
        };

        let post = format!("{}\n{}", serialize_front_matter(&meta), PLACEHOLDER_BODY);
        assert_eq!(post, r#"---
title: "This is a title"
description: ""
image: ""
publishedAt: "2024-02-27"
updatedAt: "2024-02-27"
author: "Thiago"
isPublished: false
tags:
---

<!-- Add your content here -->
"#);
    }
}
