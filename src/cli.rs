use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    name = "irs",
    version,
    about = "Heuristic inhalation risk signal for product ingredient lists"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Evaluate(EvaluateArgs),
    Reset(ResetArgs),
    Library(LibraryArgs),
    Interactive(InteractiveArgs),
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductForm {
    Spray,
    #[default]
    Liquid,
    Powder,
    Solid,
}

impl ProductForm {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spray => "spray",
            Self::Liquid => "liquid",
            Self::Powder => "powder",
            Self::Solid => "solid",
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UseSetting {
    Indoor,
    #[default]
    Outdoor,
}

impl UseSetting {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Indoor => "indoor",
            Self::Outdoor => "outdoor",
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    #[default]
    Occasional,
}

impl Frequency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Occasional => "occasional",
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct KnowledgeArgs {
    #[arg(long)]
    pub knowledge_base: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    #[arg(long, default_value = "")]
    pub ingredients: String,

    #[arg(long, value_enum, default_value_t = ProductForm::Liquid)]
    pub product_form: ProductForm,

    #[arg(long, value_enum, default_value_t = UseSetting::Outdoor)]
    pub use_setting: UseSetting,

    #[arg(long, value_enum, default_value_t = Frequency::Occasional)]
    pub frequency: Frequency,

    #[arg(long, default_value_t = false)]
    pub ventilated: bool,

    #[command(flatten)]
    pub knowledge: KnowledgeArgs,

    #[arg(long)]
    pub report_path: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ResetArgs {
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct LibraryArgs {
    #[command(flatten)]
    pub knowledge: KnowledgeArgs,

    #[arg(long)]
    pub export_path: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub knowledge: KnowledgeArgs,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}
