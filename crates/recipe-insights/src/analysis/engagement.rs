use crate::analysis::Analysis;
use crate::config::ReportConfig;
use crate::data_handling::{Dataset, InteractionKind};
use crate::report::{Chart, ChartKind};
use crate::stats::{interaction_counts, prep_time_vs_likes, top_n};

/// Recipes ranked by how often one interaction type hit them.
pub struct TopInteracted {
    kind: InteractionKind,
    title: &'static str,
    y_label: &'static str,
}

impl TopInteracted {
    pub fn views() -> Self {
        Self {
            kind: InteractionKind::View,
            title: "Top Viewed Recipes",
            y_label: "Views",
        }
    }

    pub fn likes() -> Self {
        Self {
            kind: InteractionKind::Like,
            title: "Top Liked Recipes",
            y_label: "Likes",
        }
    }
}

impl Analysis for TopInteracted {
    fn title(&self) -> &'static str {
        self.title
    }

    fn build(&self, dataset: &Dataset, config: &ReportConfig) -> Chart {
        let counts = interaction_counts(dataset, &self.kind);
        Chart::new(
            self.title,
            "Recipe ID",
            self.y_label,
            ChartKind::Bar(top_n(counts, config.top_n)),
        )
    }
}

/// Preparation time against like count, one point per recipe.
pub struct PrepTimeVsLikes;

impl Analysis for PrepTimeVsLikes {
    fn title(&self) -> &'static str {
        "Prep Time vs Likes"
    }

    fn build(&self, dataset: &Dataset, _config: &ReportConfig) -> Chart {
        // recipes without a prep time have no x position
        let points = prep_time_vs_likes(dataset)
            .into_iter()
            .filter_map(|p| p.prep_time_min.map(|prep| (prep, p.likes as f64)))
            .collect();
        Chart::new(
            self.title(),
            "Preparation Time (min)",
            "Likes",
            ChartKind::Scatter(points),
        )
    }
}
