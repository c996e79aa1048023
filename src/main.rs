use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::{env, fs};

use tryit::kernel::format::format;
use tryit::kernel::overlay::render_source;
use tryit::kernel::preview::{build_document, PreviewSources};
use tryit::kernel::services::adapters::{
    ensure_settings_file, get_preview_path, get_store_path, load_settings, FilePreview,
    FileStore,
};
use tryit::kernel::services::ports::{BufferStore, EditorConfig, PreviewRenderer};
use tryit::kernel::Language;

mod logging;

const USAGE: &str = "\
usage:
  tryit highlight <html|css|js> <file>   print the colorized overlay and gutter
  tryit format <html|css|js> <file>      print the reformatted source
  tryit save <html|css|js> <file>        store the file as that language's buffer
  tryit preview [out.html|-]             build the preview document from stored buffers
                                         (default: the data directory; `-` for stdout)";

fn main() -> io::Result<()> {
    let guard = logging::init();
    if let Some(guard) = guard.as_ref() {
        tracing::debug!(log_dir = %guard.log_dir().display(), "logging ready");
    }

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "cannot create default settings file");
    }
    let config = load_settings()
        .map(|settings| EditorConfig::from_settings(&settings))
        .unwrap_or_default();

    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match args.as_slice() {
        ["highlight", lang, file] => {
            highlight_file(&config, parse_language(lang)?, Path::new(file))
        }
        ["format", lang, file] => {
            let code = fs::read_to_string(file)?;
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", format(parse_language(lang)?, &code))
        }
        ["save", lang, file] => {
            let language = parse_language(lang)?;
            let code = fs::read_to_string(file)?;
            let mut store = open_store()?;
            store.set(language.storage_key(), &code).map_err(io::Error::other)?;
            tracing::info!(language = %language, path = %store.path().display(), "buffer saved");
            Ok(())
        }
        ["preview"] => write_preview(get_preview_path()),
        ["preview", "-"] => write_preview(None),
        ["preview", out] => write_preview(Some(PathBuf::from(out))),
        _ => {
            eprintln!("{}", USAGE);
            Err(io::Error::new(io::ErrorKind::InvalidInput, "invalid arguments"))
        }
    }
}

fn parse_language(key: &str) -> io::Result<Language> {
    Language::from_key(key).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("unknown language: {}", key),
        )
    })
}

fn open_store() -> io::Result<FileStore> {
    let path = get_store_path().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "Cannot determine data directory")
    })?;
    FileStore::open(path).map_err(io::Error::other)
}

fn highlight_file(config: &EditorConfig, language: Language, path: &Path) -> io::Result<()> {
    let code = fs::read_to_string(path)?;
    let (overlay, gutter) = render_source(language, &code, config.features.line_numbers);

    let mut stdout = io::stdout().lock();
    if let Some(gutter) = gutter {
        writeln!(stdout, "<div class=\"line-numbers\">{}</div>", gutter.render(None))?;
    }
    writeln!(stdout, "<div class=\"editor-highlight\">{}</div>", overlay.render(None))?;
    Ok(())
}

fn write_preview(out: Option<PathBuf>) -> io::Result<()> {
    let store = open_store()?;
    let texts = Language::ALL.map(|language| match store.get(language.storage_key()) {
        Ok(Some(text)) => text,
        Ok(None) => language.default_snippet().to_string(),
        Err(e) => {
            tracing::warn!(language = %language, error = %e, "store read failed");
            language.default_snippet().to_string()
        }
    });
    let sources = PreviewSources::from_fn(|language| texts[language.index()].as_str());

    match out {
        Some(path) => {
            let mut preview = FilePreview::new(path);
            preview.render(&sources).map_err(io::Error::other)?;
            tracing::info!(path = %preview.path().display(), "preview written");
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(build_document(&sources).as_bytes())
        }
    }
}
