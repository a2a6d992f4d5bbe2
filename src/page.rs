//! What the page shows for each view state, with every value already
//! formatted for display.

use serde::Serialize;

use crate::format::{format_count, format_date};
use crate::model::{ChannelSummary, SortKey, SortState, VideoRecord};
use crate::table::TableController;
use crate::view::ViewState;

pub const LOADING_MESSAGE: &str = "Cargando datos...";
pub const FAILED_MESSAGE: &str = "No se pudieron cargar los datos";
pub const SUBTITLE: &str = "Análisis de reproducciones del canal";
pub const HEADING: &str = "Estadísticas Generales";
pub const PLAY_LABEL: &str = "Reproducir";

/// Shown on sortable headers that are not the active key.
pub const UNSORTED_INDICATOR: &str = "↕";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Page {
    Loading { message: &'static str },
    Failed { message: &'static str, detail: String },
    Ready(Dashboard),
}

impl Page {
    pub fn from_state(state: &ViewState) -> Page {
        match state {
            ViewState::Loading => Page::Loading {
                message: LOADING_MESSAGE,
            },
            ViewState::Failed { message } => Page::Failed {
                message: FAILED_MESSAGE,
                detail: message.clone(),
            },
            ViewState::Ready(table) => Page::Ready(Dashboard::from_table(table)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub channel_name: String,
    pub subtitle: &'static str,
    pub heading: &'static str,
    pub stats: Vec<StatCard>,
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<Row>,
    pub sort: SortState,
}

impl Dashboard {
    pub fn from_table(table: &TableController) -> Dashboard {
        let summary = table.summary().cloned().unwrap_or_default();
        let sort = table.sort_state();

        Dashboard {
            channel_name: summary.name.clone().unwrap_or_default(),
            subtitle: SUBTITLE,
            heading: HEADING,
            stats: StatCard::from_summary(&summary),
            columns: Column::ALL
                .into_iter()
                .map(|column| ColumnHeader::new(column, sort))
                .collect(),
            rows: table.records().iter().map(Row::from_record).collect(),
            sort,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

impl StatCard {
    fn from_summary(summary: &ChannelSummary) -> Vec<StatCard> {
        vec![
            StatCard {
                label: "Total de Videos",
                value: format_count(summary.video_count),
            },
            StatCard {
                label: "Total de Reproducciones",
                value: format_count(summary.sum_of_views),
            },
            StatCard {
                label: "Suscriptores",
                value: format_count(summary.subscriber_count),
            },
            StatCard {
                label: "Vistas del Canal",
                value: format_count(summary.channel_total_views),
            },
        ]
    }
}

/// The six table columns, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Thumbnail,
    Title,
    Views,
    Likes,
    Published,
    Action,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Thumbnail,
        Column::Title,
        Column::Views,
        Column::Likes,
        Column::Published,
        Column::Action,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Column::Thumbnail => "Miniatura",
            Column::Title => "Título",
            Column::Views => "Reproducciones",
            Column::Likes => "Likes",
            Column::Published => "Fecha",
            Column::Action => "Acción",
        }
    }

    /// Only title and views have clickable headers.
    pub fn sort_key(self) -> Option<SortKey> {
        match self {
            Column::Title => Some(SortKey::Title),
            Column::Views => Some(SortKey::Views),
            _ => None,
        }
    }

    pub fn align(self) -> Align {
        match self {
            Column::Thumbnail | Column::Title => Align::Left,
            Column::Views => Align::Right,
            Column::Likes | Column::Published | Column::Action => Align::Center,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnHeader {
    pub label: &'static str,
    pub key: Option<SortKey>,
    pub indicator: Option<&'static str>,
    pub align: Align,
}

impl ColumnHeader {
    fn new(column: Column, sort: SortState) -> Self {
        let key = column.sort_key();
        let indicator = key.map(|key| {
            if key == sort.key {
                sort.direction.arrow()
            } else {
                UNSORTED_INDICATOR
            }
        });

        Self {
            label: column.label(),
            key,
            indicator,
            align: column.align(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub thumbnail: String,
    pub title: String,
    pub views: String,
    pub likes: String,
    pub published: String,
    pub link: String,
    pub play_label: &'static str,
}

impl Row {
    fn from_record(video: &VideoRecord) -> Row {
        Row {
            thumbnail: video.thumbnail_url.clone(),
            title: video.title.clone(),
            views: format_count(video.views),
            likes: format_count(video.likes),
            published: format_date(video.published_at.as_ref()),
            link: video.external_url.clone(),
            play_label: PLAY_LABEL,
        }
    }
}
