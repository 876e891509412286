use crate::opt::{Commands, Run};
use anyhow::Result;
use axum::serve;
use clap::Parser;
use faro_config::assessment::Assessment;
use faro_config::questionnaire::Questionnaire;
use faro_utils::loader::{Loader, LoaderHandler};
use faro_utils::net::create_listener;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

mod app;
mod data;
mod opt;
mod routes;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 3030;

#[derive(Debug)]
pub(crate) struct InnerAppConfig {
    questionnaire: Questionnaire,
    assessment: Assessment,
}

#[derive(Clone, Debug)]
pub(crate) struct AppConfig(Arc<InnerAppConfig>);

impl AppConfig {
    fn new(questionnaire: Questionnaire, assessment: Assessment) -> Self {
        Self(Arc::new(InnerAppConfig {
            questionnaire,
            assessment,
        }))
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.0.questionnaire
    }

    pub fn assessment(&self) -> &Assessment {
        &self.0.assessment
    }
}

async fn run(opt: Run) -> Result<()> {
    faro_utils::tracing::setup(
        faro_utils::tracing::TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .env(opt.env.clone())
            .build(),
    )?;

    let loader_handler = LoaderHandler::new();
    let loader = loader_handler.loader(&opt.data)?;

    let questionnaire = load_questionnaire(&loader).await?;
    let assessment = load_assessment(&loader).await?;

    let Run { host, port, origins, .. } = opt;

    let app_config = AppConfig::new(questionnaire, assessment);
    let app = app::create_app(app_config, &origins)?;

    let listener = create_listener((host, port), (DEFAULT_HOST, DEFAULT_PORT)).await?;

    let service = app.into_make_service();
    tracing::info!(local_addr = %listener.local_addr()?, "starting app");
    serve::serve(listener, service).await?;
    Ok(())
}

async fn load_questionnaire(loader: &Loader) -> Result<Questionnaire> {
    let questionnaire = faro_config::questionnaire::load(loader).await.inspect_err(|error| {
        tracing::error!(
            error = error as &dyn std::error::Error,
            "failed to load the question bank"
        );
    })?;
    tracing::info!(questions = questionnaire.len(), "loaded question bank");
    Ok(questionnaire)
}

async fn load_assessment(loader: &Loader) -> Result<Assessment> {
    let assessment = faro_config::assessment::load(loader).await.inspect_err(|error| {
        tracing::error!(
            error = error as &dyn std::error::Error,
            "failed to load the assessment configuration"
        );
    })?;
    tracing::info!(title = assessment.title, "loaded assessment configuration");
    Ok(assessment)
}

fn main() -> Result<()> {
    let main = async {
        let opt = opt::Cli::parse();

        match opt.command {
            Commands::Run(o) => run(o).await?,
        }
        Ok(())
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(main)
}
