use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::{mime_type_for_extension, DEFAULT_MIME_TYPE};
use crate::enums::commands::Commands;
use crate::errors::{DoclyzerError, DoclyzerResult};
use crate::server::analysis_server::AnalysisServer;
use crate::services::document_analyzer::DocumentAnalyzer;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> DoclyzerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Serve { port } => self.serve_command(port).await,
            Commands::Analyze { file, mime_type } => self.analyze_command(&file, mime_type).await,
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> DoclyzerResult<()> {
        log::info!("🚀 Initializing doclyzer configuration...");

        let path = ConfigManager::create_sample_config(self.config_path.as_deref())?;
        log::info!("📝 Edit {} to adjust the service.", path.display());
        log::info!("🔧 Run 'doclyzer validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> DoclyzerResult<()> {
        let config = ConfigManager::load(self.config_path.as_deref())?;

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                if ConfigManager::api_key_from_env(&config).is_none() {
                    log::warn!("⚠️ Environment variable {} is not set", config.ai.api_key_env);
                }
                Ok(())
            }
            Err(errors) => {
                for error in &errors {
                    log::error!("   ❌ {}", error);
                }
                Err(DoclyzerError::ConfigurationInvalid(errors))
            }
        }
    }

    async fn serve_command(&self, port: Option<u16>) -> DoclyzerResult<()> {
        let mut config = ConfigManager::load(self.config_path.as_deref())?;
        Self::apply_port_override(&mut config, port);
        ConfigManager::validate_config(&config).map_err(DoclyzerError::ConfigurationInvalid)?;

        let analyzer = self.build_analyzer(&config)?;
        AnalysisServer::new(Arc::new(analyzer), config.server)
            .run_until_ctrl_c()
            .await
    }

    async fn analyze_command(&self, file: &Path, mime_type: Option<String>) -> DoclyzerResult<()> {
        let config = self.load_valid_config()?;
        let analyzer = self.build_analyzer(&config)?;

        let bytes = tokio::fs::read(file)
            .await
            .map_err(|e| std::io::Error::new(e.kind(), format!("{}: {}", file.display(), e)))?;

        let mime_type = Self::resolve_mime_type(file, mime_type);

        log::info!("🔍 Analyzing {} as {}", file.display(), mime_type);
        let result = analyzer
            .analyze(AnalysisRequest::from_bytes(&bytes, mime_type))
            .await?;

        println!("{}", serde_json::to_string_pretty(&result)?);
        Ok(())
    }

    fn load_valid_config(&self) -> DoclyzerResult<Config> {
        let config = ConfigManager::load(self.config_path.as_deref())?;
        ConfigManager::validate_config(&config).map_err(DoclyzerError::ConfigurationInvalid)?;
        Ok(config)
    }

    /// `serve --port` wins over the configured port.
    fn apply_port_override(config: &mut Config, port: Option<u16>) {
        if let Some(port) = port {
            config.server.port = port;
        }
    }

    /// An explicit `--mime-type` wins; otherwise the file extension decides.
    fn resolve_mime_type(file: &Path, explicit: Option<String>) -> String {
        explicit
            .filter(|mime_type| !mime_type.trim().is_empty())
            .unwrap_or_else(|| {
                file.extension()
                    .and_then(|ext| ext.to_str())
                    .map_or(DEFAULT_MIME_TYPE, mime_type_for_extension)
                    .to_string()
            })
    }

    /// The API key is read from the environment exactly once, here.
    fn build_analyzer(&self, config: &Config) -> DoclyzerResult<DocumentAnalyzer> {
        let api_key = ConfigManager::api_key_from_env(config);
        Ok(DocumentAnalyzer::from_config(&config.ai, api_key)?)
    }
}
