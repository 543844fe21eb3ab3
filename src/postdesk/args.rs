use clap::{Parser, Subcommand};
use postdesk::model::PostType;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "postdesk", version)]
#[command(about = "Compose questions and articles and file them into a document store", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the document store and config.json
    #[arg(long, global = true, env = "POSTDESK_HOME")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compose and submit a new post
    #[command(alias = "n")]
    Post {
        /// Title of the post (opens the editor if title or description is missing)
        #[arg(short, long)]
        title: Option<String>,

        /// Body of the post
        #[arg(short, long)]
        description: Option<String>,

        /// Comma separated tags, e.g. "rust, async"
        #[arg(long)]
        tags: Option<String>,

        /// Kind of post: question or article
        #[arg(long = "type", default_value = "question")]
        post_type: PostType,

        /// Image file to attach
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// List stored posts, newest first
    #[command(alias = "ls")]
    List,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g. collection)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_post_flags() {
        let cli = Cli::try_parse_from([
            "postdesk",
            "post",
            "-t",
            "Q1",
            "-d",
            "D1",
            "--tags",
            "x, y",
            "--type",
            "article",
            "--no-editor",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Post {
                title,
                description,
                tags,
                post_type,
                image,
                no_editor,
            }) => {
                assert_eq!(title.as_deref(), Some("Q1"));
                assert_eq!(description.as_deref(), Some("D1"));
                assert_eq!(tags.as_deref(), Some("x, y"));
                assert_eq!(post_type, PostType::Article);
                assert_eq!(image, None);
                assert!(no_editor);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn type_defaults_to_question() {
        let cli = Cli::try_parse_from(["postdesk", "n", "--no-editor"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Post {
                post_type: PostType::Question,
                ..
            })
        ));
    }

    #[test]
    fn rejects_unknown_type() {
        assert!(Cli::try_parse_from(["postdesk", "post", "--type", "poll"]).is_err());
    }
}
