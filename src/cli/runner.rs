use crate::{
    cli::{
        answers::AnswerCollector,
        processor::{Emitter, FileProcessor},
        Args,
    },
    config::{resolve, Answers, ConfigurationRecord, GeneratorOptions, TestFramework},
    error::Result,
    install::{CommandInstaller, DependencyInstaller, InstallOptions},
    ioutils::{app_name_for, get_output_dir},
    plan::{build_plan, build_test_plan, ScaffoldPlan},
    prompt::{get_prompt_engine, AutomaticPrompter, ConfirmationPrompter, DialoguerPrompter},
    renderer::MiniJinjaRenderer,
    template::{get_template_store, PlanProcessor},
    wire::{DeferredWirer, ReferenceWirer},
};
use std::path::{Path, PathBuf};

const WELCOME_MESSAGE: &str = "Out of the box I include HTML5 Boilerplate, jQuery, and a Gruntfile.js to build your app.";

/// Main CLI runner that orchestrates the entire generation workflow
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete generation workflow
    pub fn run(self) -> Result<()> {
        let output_root = get_output_dir(&self.args.output_dir, self.args.force)?;
        let options = self.args.generator_options(app_name_for(&output_root));

        // Fail on an unknown framework before asking anything
        options.test_framework.parse::<TestFramework>()?;

        if !options.skip_welcome_message {
            println!("{WELCOME_MESSAGE}");
        }

        let answers = self.collect_answers()?;
        let config = self.resolve(&options, &answers)?;
        let plan = build_plan(&config);

        self.emit(&output_root, &config, &plan)?;

        let targets: Vec<PathBuf> =
            plan.wiring_targets().iter().map(|target| output_root.join(target)).collect();
        DeferredWirer.wire(&plan.manifest, &targets)?;

        self.install(&output_root, &config)?;

        println!("Project generation completed successfully in {}.", output_root.display());
        Ok(())
    }

    /// Collects answers from all available sources
    fn collect_answers(&self) -> Result<Answers> {
        let engine = get_prompt_engine(self.args.non_interactive);
        let collector = AnswerCollector::new(engine.as_ref());
        collector.collect_answers(self.args.answers_file.as_deref(), self.args.answers.clone())
    }

    fn resolve(
        &self,
        options: &GeneratorOptions,
        answers: &Answers,
    ) -> Result<ConfigurationRecord> {
        let config = resolve(options, answers)?;
        log::info!(
            "Generating '{}' with features [{}]",
            config.app_name(),
            config.features().map(|f| f.label()).collect::<Vec<_>>().join(", ")
        );
        Ok(config)
    }

    /// Emits the project directories, the main plan and then the test plan
    fn emit(
        &self,
        output_root: &Path,
        config: &ConfigurationRecord,
        plan: &ScaffoldPlan,
    ) -> Result<()> {
        let engine = MiniJinjaRenderer::new();
        let store = get_template_store(self.args.template_dir.as_deref());
        let confirmer = self.get_confirmer();
        let processor = PlanProcessor::new(&engine, store.as_ref(), output_root);
        let emitter = FileProcessor::new(
            processor,
            confirmer.as_ref(),
            &self.args.skip_confirms,
            self.args.dry_run,
        );

        for directory in &plan.directories {
            emitter.create_directory(directory)?;
        }
        for entry in &plan.entries {
            emitter.emit(entry)?;
        }
        for entry in &build_test_plan(config) {
            emitter.emit(entry)?;
        }
        Ok(())
    }

    /// Overwrite confirmations are declined without a terminal
    fn get_confirmer(&self) -> Box<dyn ConfirmationPrompter> {
        if self.args.non_interactive {
            Box::new(AutomaticPrompter::new())
        } else {
            Box::new(DialoguerPrompter::new())
        }
    }

    fn install(&self, output_root: &Path, config: &ConfigurationRecord) -> Result<()> {
        if self.args.dry_run && !config.skip_install() {
            log::info!("[DRY RUN] Skipping dependency installation");
        }
        CommandInstaller::for_project(output_root).install(&self.install_options(config))
    }

    /// A dry run neither installs nor tells the user to install.
    fn install_options(&self, config: &ConfigurationRecord) -> InstallOptions {
        InstallOptions {
            skip_install: config.skip_install() || self.args.dry_run,
            skip_message: config.skip_install_message() || self.args.dry_run,
        }
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
