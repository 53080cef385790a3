//! Command line tool for tallying remark sentiment

use std::path::PathBuf;

use anyhow::anyhow;
use futures::future::try_join_all;
use pico_args::Arguments;
use proev_remarks::{
    cli::OutputFormat,
    config::Config,
    datasets::{evaluations::Evaluations, remarks::Remarks, Dataset, LoadableDataset},
    lexicon::Lexicon,
    pipelines::Pipeline,
    summaries::{self, report, GroupBy, Summary},
};

const HELP: &str = "\
Usage: proev-remarks [OPTIONS] FILE...

Arguments:
  FILE                 Evaluation CSV exports or text files with one remark per line

Options:
  -h, --help           Print help
  -c, --config         A YAML or JSON config file
  -l, --lexicon        A YAML or JSON lexicon file (defaults to the built-in lexicon)
  -g, --group-by       Group evaluations by 'instructor', 'subject' or 'all'
  -f, --format         The output format: 'text' or 'json'
  -d, --dataset        Treat every FILE as 'evaluations' or 'remarks' instead of detecting it
  -p, --pipeline       The pipeline to use (defaults to 'remark-sentiment')
";

#[derive(Debug)]
struct Args {
    config: Option<PathBuf>,
    lexicon: Option<PathBuf>,
    group_by: Option<String>,
    format: Option<String>,
    dataset: Option<String>,
    pipeline: Option<String>,
    files: Vec<PathBuf>,
}

impl Args {
    fn parse() -> anyhow::Result<Option<Self>> {
        let mut pargs = Arguments::from_env();

        // Help has a higher priority and should be handled separately.
        if pargs.contains(["-h", "--help"]) {
            return Ok(None);
        }

        let mut args = Args {
            config: pargs.opt_value_from_str(["-c", "--config"])?,
            lexicon: pargs.opt_value_from_str(["-l", "--lexicon"])?,
            group_by: pargs.opt_value_from_str(["-g", "--group-by"])?,
            format: pargs.opt_value_from_str(["-f", "--format"])?,
            dataset: pargs.opt_value_from_str(["-d", "--dataset"])?,
            pipeline: pargs.opt_value_from_str(["-p", "--pipeline"])?,
            files: Vec::new(),
        };

        args.files = pargs.finish().into_iter().map(PathBuf::from).collect();

        if args.files.is_empty() {
            return Err(anyhow!("Missing required argument: FILE"));
        }

        Ok(Some(args))
    }
}

/// A loaded input file
enum Source {
    Evaluations(Evaluations),
    Remarks(PathBuf, Remarks),
}

async fn load_source(path: PathBuf, dataset: Dataset) -> anyhow::Result<Source> {
    match dataset {
        Dataset::Evaluations => Ok(Source::Evaluations(Evaluations::load(&path).await?)),
        Dataset::Remarks => {
            let remarks = Remarks::load(&path).await?;

            Ok(Source::Remarks(path, remarks))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let Some(args) = Args::parse()? else {
        print!("{}", HELP);

        return Ok(());
    };

    let pipeline = match &args.pipeline {
        Some(pipeline) => Pipeline::try_from(pipeline.as_str())?,
        None => Pipeline::default(),
    };

    let mut config = match &args.config {
        Some(path) => Config::load(path).await?,
        None => Config::default(),
    };

    if let Some(lexicon) = &args.lexicon {
        config.lexicon = Some(lexicon.clone());
    }

    if let Some(group_by) = &args.group_by {
        config.group_by = GroupBy::try_from(group_by.as_str())?;
    }

    if let Some(format) = &args.format {
        config.format = OutputFormat::try_from(format.as_str())?;
    }

    let dataset = args
        .dataset
        .as_deref()
        .map(Dataset::try_from)
        .transpose()?;

    log::info!("Running the {} pipeline over {} files", pipeline, args.files.len());

    let lexicon: Lexicon = config.lexicon().await?;

    let sources = try_join_all(args.files.iter().map(|path| {
        let dataset = dataset.unwrap_or_else(|| Dataset::detect(path));

        load_source(path.clone(), dataset)
    }))
    .await?;

    let mut records = Vec::new();
    let mut output: Vec<Summary> = Vec::new();

    for source in sources {
        match source {
            Source::Evaluations(evaluations) => records.extend_from_slice(evaluations.records()),
            Source::Remarks(path, remarks) => output.push(Summary::from_items(
                path.display().to_string(),
                remarks.lines(),
                &lexicon,
            )),
        }
    }

    if !records.is_empty() {
        output.extend(summaries::summarize(&records, config.group_by, &lexicon));
    }

    println!("{}", report::render(&output, config.format)?);

    Ok(())
}
