use crate::parse_list;
use anyhow::anyhow;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, io::ErrorKind, path::Path, str::FromStr, time::Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Internship => "internship",
        }
    }
}

impl Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for JobType {
    type Err = JobsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full-time" => Ok(JobType::FullTime),
            "part-time" => Ok(JobType::PartTime),
            "contract" => Ok(JobType::Contract),
            "internship" => Ok(JobType::Internship),
            other => Err(JobsError::InvalidField {
                field: "job_type",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Executive,
}

impl ExperienceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Executive => "executive",
        }
    }
}

impl Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ExperienceLevel {
    type Err = JobsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "entry" => Ok(ExperienceLevel::Entry),
            "mid" => Ok(ExperienceLevel::Mid),
            "senior" => Ok(ExperienceLevel::Senior),
            "executive" => Ok(ExperienceLevel::Executive),
            other => Err(JobsError::InvalidField {
                field: "experience_level",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: u64,

    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,

    /// Display string, e.g. "$90,000 - $120,000"
    #[serde(default)]
    pub salary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<u64>,

    #[serde(default)]
    pub remote: bool,
    pub posted: DateTime<Utc>,

    pub job_type: JobType,
    pub experience_level: ExperienceLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,

    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
}

impl JobRecord {
    /// Every text field joined with spaces, lowercased.
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> = vec![
            self.title.as_str(),
            self.company.as_str(),
            self.location.as_str(),
            self.description.as_str(),
            self.job_type.label(),
            self.experience_level.label(),
        ];
        if let Some(industry) = &self.industry {
            parts.push(industry);
        }
        parts.extend(self.skills.iter().map(String::as_str));
        parts.extend(self.benefits.iter().map(String::as_str));

        parts.join(" ").to_lowercase()
    }
}

#[derive(thiserror::Error, Debug)]
pub enum JobsError {
    #[error("jobs file not found: {0}")]
    NotFound(String),

    #[error("unsupported jobs file format: {0} (expected .json or .csv)")]
    UnsupportedFormat(String),

    #[error("invalid value for {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("io error: {0:?}")]
    IO(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected error: {0:?}")]
    Other(#[from] anyhow::Error),
}

const CSV_HEADERS: [&str; 15] = [
    "id",
    "title",
    "company",
    "location",
    "description",
    "salary",
    "salary_min",
    "salary_max",
    "remote",
    "posted",
    "job_type",
    "experience_level",
    "industry",
    "skills",
    "benefits",
];

#[derive(Debug, Clone, Default)]
pub struct JobStore {
    list: Vec<JobRecord>,
}

impl JobStore {
    pub fn new(list: Vec<JobRecord>) -> Self {
        Self { list }
    }

    pub fn mock() -> Self {
        Self::new(mock_jobs())
    }

    /// Load a dataset from a `.json` or `.csv` file.
    pub fn load(path: &str) -> Result<Self, JobsError> {
        if let Err(err) = std::fs::metadata(path) {
            return match err.kind() {
                ErrorKind::NotFound => Err(JobsError::NotFound(path.to_string())),
                _ => Err(err.into()),
            };
        }

        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        let now = Instant::now();
        let list = match ext.as_str() {
            "json" => Self::read_json(path)?,
            "csv" => Self::read_csv(path)?,
            _ => return Err(JobsError::UnsupportedFormat(path.to_string())),
        };

        log::debug!(
            "loaded {} jobs from {path} in {}ms",
            list.len(),
            now.elapsed().as_millis()
        );

        Ok(Self::new(list))
    }

    fn read_json(path: &str) -> Result<Vec<JobRecord>, JobsError> {
        let data = std::fs::read(path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    fn read_csv(path: &str) -> Result<Vec<JobRecord>, JobsError> {
        let mut csv_reader = csv::Reader::from_path(path)?;

        let headers = csv_reader.headers()?.clone();
        for (idx, expected) in CSV_HEADERS.iter().enumerate() {
            if headers.get(idx).map(str::trim) != Some(*expected) {
                return Err(anyhow!("csv header #{} must be {expected:?}", idx + 1).into());
            }
        }

        let mut jobs = vec![];
        for record in csv_reader.records() {
            let record = record?;
            let field = |idx: usize| get_field(&record, idx);

            let job = JobRecord {
                id: parse_number(field(0)?, "id")?,
                title: field(1)?.to_string(),
                company: field(2)?.to_string(),
                location: field(3)?.to_string(),
                description: field(4)?.to_string(),
                salary: field(5)?.to_string(),
                salary_min: parse_optional_number(field(6)?, "salary_min")?,
                salary_max: parse_optional_number(field(7)?, "salary_max")?,
                remote: parse_bool(field(8)?)?,
                posted: parse_posted(field(9)?)?,
                job_type: field(10)?.parse()?,
                experience_level: field(11)?.parse()?,
                industry: Some(field(12)?)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
                skills: parse_list(field(13)?),
                benefits: parse_list(field(14)?),
            };
            jobs.push(job);
        }

        Ok(jobs)
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.list
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

fn get_field(record: &csv::StringRecord, idx: usize) -> Result<&str, JobsError> {
    record
        .get(idx)
        .map(str::trim)
        .ok_or_else(|| anyhow!("couldnt get record {}", CSV_HEADERS[idx]).into())
}

fn parse_number(value: &str, field: &'static str) -> Result<u64, JobsError> {
    value.parse::<u64>().map_err(|_| JobsError::InvalidField {
        field,
        value: value.to_string(),
    })
}

fn parse_optional_number(value: &str, field: &'static str) -> Result<Option<u64>, JobsError> {
    if value.is_empty() {
        return Ok(None);
    }
    parse_number(value, field).map(Some)
}

fn parse_bool(value: &str) -> Result<bool, JobsError> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" | "" => Ok(false),
        _ => Err(JobsError::InvalidField {
            field: "remote",
            value: value.to_string(),
        }),
    }
}

fn parse_posted(value: &str) -> Result<DateTime<Utc>, JobsError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| JobsError::InvalidField {
            field: "posted",
            value: value.to_string(),
        })
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Built-in sample dataset. Posting dates are relative to the current time.
pub fn mock_jobs() -> Vec<JobRecord> {
    mock_jobs_at(Utc::now())
}

pub fn mock_jobs_at(now: DateTime<Utc>) -> Vec<JobRecord> {
    vec![
        JobRecord {
            id: 1,
            title: "Frontend Developer".to_string(),
            company: "TechCorp".to_string(),
            location: "San Francisco, CA".to_string(),
            description: "Build responsive user interfaces with React and TypeScript for our customer dashboard.".to_string(),
            salary: "$90,000 - $120,000".to_string(),
            salary_min: Some(90_000),
            salary_max: Some(120_000),
            remote: true,
            posted: now - Duration::days(2),
            job_type: JobType::FullTime,
            experience_level: ExperienceLevel::Mid,
            industry: Some("Technology".to_string()),
            skills: strings(&["React", "TypeScript", "CSS"]),
            benefits: strings(&["Health insurance", "401k", "Flexible hours"]),
        },
        JobRecord {
            id: 2,
            title: "UX Designer".to_string(),
            company: "DesignHub".to_string(),
            location: "New York, NY".to_string(),
            description: "Own the user research and interaction design of our mobile apps.".to_string(),
            salary: "$80,000 - $100,000".to_string(),
            salary_min: Some(80_000),
            salary_max: Some(100_000),
            remote: false,
            posted: now - Duration::days(5),
            job_type: JobType::FullTime,
            experience_level: ExperienceLevel::Mid,
            industry: Some("Design".to_string()),
            skills: strings(&["Figma", "User Research", "Prototyping"]),
            benefits: strings(&["Health insurance", "Gym membership"]),
        },
        JobRecord {
            id: 3,
            title: "Backend Engineer".to_string(),
            company: "DataFlow".to_string(),
            location: "Austin, TX".to_string(),
            description: "Design and scale distributed services and APIs in Go and PostgreSQL.".to_string(),
            salary: "$110,000 - $140,000".to_string(),
            salary_min: Some(110_000),
            salary_max: Some(140_000),
            remote: true,
            posted: now - Duration::days(1),
            job_type: JobType::FullTime,
            experience_level: ExperienceLevel::Senior,
            industry: Some("Technology".to_string()),
            skills: strings(&["Go", "PostgreSQL", "Kubernetes"]),
            benefits: strings(&["Stock options", "Remote stipend"]),
        },
        JobRecord {
            id: 4,
            title: "Marketing Intern".to_string(),
            company: "BrandBoost".to_string(),
            location: "Chicago, IL".to_string(),
            description: "Support campaign planning and social media analytics for our clients.".to_string(),
            salary: "$20/hour".to_string(),
            salary_min: None,
            salary_max: None,
            remote: false,
            posted: now - Duration::days(10),
            job_type: JobType::Internship,
            experience_level: ExperienceLevel::Entry,
            industry: Some("Marketing".to_string()),
            skills: strings(&["Social Media", "Copywriting"]),
            benefits: strings(&["Mentorship"]),
        },
        JobRecord {
            id: 5,
            title: "Senior Product Manager".to_string(),
            company: "InnovateLabs".to_string(),
            location: "Seattle, WA".to_string(),
            description: "Lead the roadmap for our analytics platform and work closely with engineering.".to_string(),
            salary: "$130,000 - $160,000".to_string(),
            salary_min: Some(130_000),
            salary_max: Some(160_000),
            remote: true,
            posted: now - Duration::days(3),
            job_type: JobType::FullTime,
            experience_level: ExperienceLevel::Senior,
            industry: Some("Technology".to_string()),
            skills: strings(&["Product Strategy", "Agile", "SQL"]),
            benefits: strings(&["Health insurance", "Stock options", "Parental leave"]),
        },
        JobRecord {
            id: 6,
            title: "Data Analyst".to_string(),
            company: "FinSight".to_string(),
            location: "Boston, MA".to_string(),
            description: "Turn financial data into dashboards and reports for the investment team.".to_string(),
            salary: "$70,000 - $90,000".to_string(),
            salary_min: Some(70_000),
            salary_max: Some(90_000),
            remote: false,
            posted: now - Duration::days(7),
            job_type: JobType::Contract,
            experience_level: ExperienceLevel::Entry,
            industry: Some("Finance".to_string()),
            skills: strings(&["SQL", "Python", "Tableau"]),
            benefits: strings(&["Flexible hours"]),
        },
        JobRecord {
            id: 7,
            title: "Junior React Developer".to_string(),
            company: "StartupXYZ".to_string(),
            location: "Remote".to_string(),
            description: "Join a small team shipping features across our React web app.".to_string(),
            salary: "$60,000 - $75,000".to_string(),
            salary_min: Some(60_000),
            salary_max: Some(75_000),
            remote: true,
            posted: now - Duration::days(4),
            job_type: JobType::PartTime,
            experience_level: ExperienceLevel::Entry,
            industry: Some("Technology".to_string()),
            skills: strings(&["React", "JavaScript"]),
            benefits: strings(&["Remote work"]),
        },
        JobRecord {
            id: 8,
            title: "Chief Technology Officer".to_string(),
            company: "GreenEnergy Co".to_string(),
            location: "Denver, CO".to_string(),
            description: "Set the technical vision and build the engineering organization.".to_string(),
            salary: "Competitive".to_string(),
            salary_min: None,
            salary_max: None,
            remote: true,
            posted: now - Duration::days(14),
            job_type: JobType::FullTime,
            experience_level: ExperienceLevel::Executive,
            industry: Some("Energy".to_string()),
            skills: strings(&["Leadership", "Architecture", "Strategy"]),
            benefits: strings(&["Equity", "Health insurance"]),
        },
    ]
}
