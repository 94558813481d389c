use super::project::ProjectEntry;
use super::views::VideoId;
use crate::error::{Result, ViewsError};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// id, title, subtitle, tag, badge, image, youtube id
type BuiltinProject = (u32, &'static str, &'static str, &'static str, &'static str, &'static str, &'static str);

const BUILTIN_PROJECTS: &[BuiltinProject] = &[
    (
        10,
        "Kathandare (Tokyo Legend)",
        "A dramatic Japanese ancient romance where love transcends war, betrayal, and fate.",
        "Arcane × Historical",
        "Latest",
        "image10",
        "lrLXToiFsVw",
    ),
    (
        9,
        "Rosalina (Global Club Mix)",
        "A Puerto Rican narrative of guilt, transformation, and colorful redemption through dance.",
        "Cultural Drama",
        "Featured",
        "image9",
        "6Kkd3FxtHhM",
    ),
    (
        8,
        "Kalu Kella Mamai (Dark Beauty)",
        "When the music drops and the lights collide, one presence rises above the crowd.",
        "Neon Dance",
        "Featured",
        "image8",
        "qg1WRX4tOLE",
    ),
    (
        7,
        "Mewila Penevi (Visions Made)",
        "Sometimes love doesn't end with a storm… it fades quietly, like footprints beneath the tide.",
        "Romantic Drama",
        "Project 7",
        "image7",
        "bHKD0xGFJ3A",
    ),
    (
        6,
        "Dasama Riddana (Arabian Heat)",
        "In the heart of the silent dunes, a queen of light rises and the desert remembers her name.",
        "Arabian Fantasy",
        "Project 6",
        "image6",
        "hGzRDIapU40",
    ),
    (
        5,
        "Nil Desin (Blue Eyes) [Extended Club Mix]",
        "Where the past and present collide in a fiery dance of culture, rhythm, and timeless energy.",
        "Urban Fantasy",
        "Project 5",
        "image5",
        "kfnX66HhwdI",
    ),
    (
        4,
        "The Train Song (Elephant Pass Edit)",
        "Some journeys take you places, others bring you home. Where the rails meet the sunset.",
        "Dreamy Anime",
        "Project 4",
        "image4",
        "1TvsqxpVQdI",
    ),
    (
        3,
        "Mathakada Handawe (Do You Remember?)",
        "A rain-soaked promise, a red umbrella, and the silence between two hearts.",
        "Cinematic Romance",
        "Project 3",
        "image3",
        "0I3Cm0k2OpU",
    ),
    (
        2,
        "Pandama (The Happy Devil)",
        "Where the past and present collide in a fiery dance of culture, rhythm, and timeless energy.",
        "Dark Fantasy",
        "Project 2",
        "image2",
        "pY25tXNK5uM",
    ),
    (
        1,
        "Jeewana Me Gamana (The Light)",
        "A visual symphony of divine power and electric synthesis: where myth meets energy.",
        "Ethereal Fantasy",
        "Project 1",
        "image1",
        "ZpYoE54rmpI",
    ),
];

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Projects(Vec<ProjectEntry>),
    #[serde(rename_all = "camelCase")]
    Full {
        projects: Vec<ProjectEntry>,
        #[serde(default)]
        video_ids: Option<Vec<VideoId>>,
    },
}

/// The read-only project list, always kept newest first, plus the set of
/// videos the view fetcher scrapes.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<ProjectEntry>,
    video_ids: Vec<VideoId>,
}

impl Catalog {
    pub fn new(mut projects: Vec<ProjectEntry>, video_ids: Option<Vec<VideoId>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.id) {
                return Err(ViewsError::Catalog(format!(
                    "duplicate project id {}",
                    project.id
                )));
            }
        }

        projects.sort_by(|a, b| b.id.cmp(&a.id));

        let video_ids = video_ids.unwrap_or_else(|| {
            projects
                .iter()
                .map(|project| project.youtube_id.clone())
                .collect()
        });

        for project in &projects {
            if !video_ids.contains(&project.youtube_id) {
                warn!(
                    "Project {} video {} is not in the fetch list and will always rank with zero views",
                    project.id, project.youtube_id
                );
            }
        }

        Ok(Self {
            projects,
            video_ids,
        })
    }

    pub fn builtin() -> Self {
        let projects: Vec<ProjectEntry> = BUILTIN_PROJECTS
            .iter()
            .map(
                |&(id, title, subtitle, tag, badge, image, youtube_id)| ProjectEntry {
                    id,
                    title: title.to_string(),
                    subtitle: subtitle.to_string(),
                    tag: tag.to_string(),
                    badge: badge.to_string(),
                    image: image.to_string(),
                    youtube_id: youtube_id.to_string(),
                },
            )
            .collect();
        let video_ids = projects.iter().map(|p| p.youtube_id.clone()).collect();

        Self {
            projects,
            video_ids,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        let catalog = match file {
            CatalogFile::Projects(projects) => Self::new(projects, None)?,
            CatalogFile::Full {
                projects,
                video_ids,
            } => Self::new(projects, video_ids)?,
        };

        info!(
            "Loaded {} projects from {}",
            catalog.project_count(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn projects(&self) -> &[ProjectEntry] {
        &self.projects
    }

    pub fn video_ids(&self) -> &[VideoId] {
        &self.video_ids
    }

    /// Newest-first slice; a limit of zero means every project.
    pub fn default_order(&self, limit: usize) -> &[ProjectEntry] {
        if limit == 0 {
            &self.projects
        } else {
            &self.projects[..limit.min(self.projects.len())]
        }
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// WebP paths for the hero collage.
    pub fn image_paths(&self, path_prefix: &str) -> Vec<String> {
        self.projects
            .iter()
            .map(|project| project.image_path(path_prefix, "webp"))
            .collect()
    }
}
