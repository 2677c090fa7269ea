use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::{
    filters::FilterCriteria,
    jobs::{ExperienceLevel, JobType},
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

fn parse_job_type(value: &str) -> Result<JobType, String> {
    value.parse().map_err(|err: crate::jobs::JobsError| err.to_string())
}

fn parse_experience(value: &str) -> Result<ExperienceLevel, String> {
    value
        .parse()
        .map_err(|err: crate::jobs::JobsError| err.to_string())
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Job type: full-time, part-time, contract, internship. Repeatable.
    #[clap(short = 't', long = "job-type", value_parser = parse_job_type)]
    pub job_type: Vec<JobType>,

    /// Experience level: entry, mid, senior, executive. Repeatable.
    #[clap(short = 'e', long = "experience", value_parser = parse_experience)]
    pub experience_level: Vec<ExperienceLevel>,

    /// Industry substring. Repeatable, any of them may match.
    #[clap(short, long)]
    pub industry: Vec<String>,

    /// Only remote jobs
    #[clap(short, long, default_value = "false")]
    pub remote: bool,

    /// Location substring
    #[clap(short, long)]
    pub location: Option<String>,

    /// Minimum acceptable salary
    #[clap(long)]
    pub salary_min: Option<u64>,

    /// Maximum acceptable salary
    #[clap(long)]
    pub salary_max: Option<u64>,

    /// Only jobs posted within this many days
    #[clap(short, long)]
    pub posted_within: Option<i64>,

    /// Required skill. Repeatable, all of them have to match.
    #[clap(short, long = "skill")]
    pub skills: Vec<String>,
}

impl From<FilterArgs> for FilterCriteria {
    fn from(args: FilterArgs) -> Self {
        FilterCriteria {
            job_type: args.job_type,
            experience_level: args.experience_level,
            industry: args.industry,
            remote: args.remote.then_some(true),
            location: args.location,
            salary_min: args.salary_min,
            salary_max: args.salary_max,
            posted_within: args.posted_within,
            skills: args.skills,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate cli docs in markdown format
    #[cfg(feature = "markdown-docs")]
    #[clap(hide = true)]
    MarkdownDocs {},

    /// Search jobs
    Search {
        /// Free-text query: "exact phrase", +required, -excluded, a OR b
        #[clap(allow_hyphen_values = true)]
        query: Option<String>,

        #[clap(flatten)]
        filters: FilterArgs,

        /// Page number, starting at 1
        #[clap(long)]
        page: Option<usize>,

        /// Results per page
        #[clap(long)]
        page_size: Option<usize>,

        /// Jobs file (.json or .csv). Defaults to config data_path,
        /// then to the built-in sample jobs.
        #[clap(short, long)]
        data: Option<String>,

        /// Print the count
        #[clap(short = 'c', long, default_value = "false")]
        count: bool,
    },
    /// Show how a query is split into terms
    Parse {
        #[clap(allow_hyphen_values = true)]
        query: String,
    },
    /// List synonyms used to broaden plain terms
    Synonyms {
        /// Only show this term
        term: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_args_into_criteria() {
        let args = Args::try_parse_from([
            "ts",
            "search",
            "developer +react -junior",
            "--job-type",
            "full-time",
            "-t",
            "contract",
            "--experience",
            "senior",
            "--remote",
            "--skill",
            "React",
            "--salary-min",
            "100000",
            "--page",
            "2",
        ])
        .unwrap();

        let Command::Search {
            query,
            filters,
            page,
            ..
        } = args.command
        else {
            panic!("expected search command");
        };

        assert_eq!(query.as_deref(), Some("developer +react -junior"));
        assert_eq!(page, Some(2));

        let criteria = FilterCriteria::from(filters);
        assert_eq!(criteria.job_type, vec![JobType::FullTime, JobType::Contract]);
        assert_eq!(criteria.experience_level, vec![ExperienceLevel::Senior]);
        assert_eq!(criteria.remote, Some(true));
        assert_eq!(criteria.skills, vec!["React".to_string()]);
        assert_eq!(criteria.salary_min, Some(100_000));
    }

    #[test]
    fn test_no_remote_flag_is_no_constraint() {
        let args = Args::try_parse_from(["ts", "search"]).unwrap();
        let Command::Search { filters, query, .. } = args.command else {
            panic!("expected search command");
        };
        assert!(query.is_none());
        assert!(FilterCriteria::from(filters).is_empty());
    }

    #[test]
    fn test_invalid_job_type_rejected() {
        assert!(Args::try_parse_from(["ts", "search", "--job-type", "gig"]).is_err());
    }

    #[test]
    fn test_query_starting_with_hyphen() {
        let args = Args::try_parse_from(["ts", "parse", "-junior"]).unwrap();
        let Command::Parse { query } = args.command else {
            panic!("expected parse command");
        };
        assert_eq!(query, "-junior");
    }
}
