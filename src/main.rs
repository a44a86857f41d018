use clap::Parser;
use exhibit_recon::{cli, config, error, export, extractor, logging, store};
use cli::{Cli, Commands, ReportFormat};
use config::Config;
use error::{AppError, Result};
use exhibit_recon_common::{diff_positional, ExhibitionMatcher, IndexedRecord, LoadedRecords};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Extract { input, url, output, compare, no_save } => {
            println!("🔎 exhibit-recon - 전시회 정보 추출\n");

            if !input.exists() {
                return Err(AppError::FileNotFound(input.display().to_string()));
            }

            // 1. 본문 읽기
            println!("[1/3] 본문 읽는 중...");
            let text = std::fs::read_to_string(&input)?;
            println!("✔ {} bytes\n", text.len());

            // 2. LLM 추출
            println!("[2/3] LLM 추출 중... (모델: {})", config.model);
            let client = extractor::OllamaClient::from_config(&config)?;
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg} [{elapsed}]")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message("응답 대기");
            spinner.enable_steady_tick(Duration::from_millis(120));
            let envelope = extractor::extract_record(&client, &text, &url).await;
            spinner.finish_and_clear();
            let envelope = envelope?;
            println!("✔ 추출 완료: {}\n", envelope.data.display_name());

            print!("{}", export::markdown::render_record(&envelope.data));

            // 3. 저장
            if no_save {
                println!("\n[3/3] 저장 생략");
            } else {
                println!("\n[3/3] 결과 저장 중...");
                let dir = output.unwrap_or_else(|| config.output_dir.clone());
                let path = store::save_envelope(&dir, &envelope)?;
                println!("✔ 저장: {}", path.display());
            }

            // 4. 비교 (선택)
            if let Some(stored_path) = compare {
                println!("\n- 저장 레코드와 비교 중: {}", stored_path.display());
                let matcher = ExhibitionMatcher::new(config.matcher_config(None, None, None))?;
                let stored = store::load_stored_set(&stored_path)?;
                let left = LoadedRecords {
                    records: vec![IndexedRecord {
                        index: 0,
                        record: envelope.data.clone(),
                    }],
                    skipped: Vec::new(),
                };
                let report = matcher.compare_loaded(
                    input.display().to_string(),
                    stored_path.display().to_string(),
                    left,
                    stored,
                );
                println!();
                export::export_report(&report, &ReportFormat::Markdown, None)?;
            }

            println!("\n✅ 완료");
        }

        Commands::Compare { left, right, threshold, weight_kr, weight_en, format, output } => {
            println!("📋 exhibit-recon - 레코드 비교\n");

            let matcher =
                ExhibitionMatcher::new(config.matcher_config(threshold, weight_kr, weight_en))?;

            println!("[1/3] 파일 읽는 중...");
            let left_records = store::load_stored_set(&left)?;
            let right_records = store::load_stored_set(&right)?;
            println!(
                "✔ 왼쪽 {}건 / 오른쪽 {}건\n",
                left_records.len(),
                right_records.len()
            );

            println!("[2/3] 매칭 중... (임계값 {:.2})", matcher.threshold());
            let report = matcher.compare_loaded(
                left.display().to_string(),
                right.display().to_string(),
                left_records,
                right_records,
            );
            let summary = report.summary();
            println!(
                "✔ 매칭 {} / 미매칭 {} / 건너뜀 {}\n",
                summary.matched, summary.unmatched, summary.skipped
            );

            println!("[3/3] 출력 중... ({})", format);
            if let Some(path) = export::export_report(&report, &format, output.as_deref())? {
                println!("✔ 출력: {}", path.display());
            }
        }

        Commands::Diff { a, b, format } => {
            let left = store::load_stored_set(&a)?.to_records();
            let right = store::load_stored_set(&b)?.to_records();
            let diffs = diff_positional(&left, &right);

            match format {
                ReportFormat::Json => println!("{}", export::json::positional_to_string(&diffs)?),
                ReportFormat::Markdown => print!("{}", export::markdown::render_positional(&diffs)),
                ReportFormat::Excel => {
                    return Err(AppError::Export("diff 는 markdown/json 만 지원합니다".into()));
                }
            }
        }

        Commands::Normalize { input, output } => {
            let loaded = store::load_stored_set(&input)?;
            for skipped in &loaded.skipped {
                eprintln!("⚠ #{} 건너뜀: {}", skipped.index, skipped.reason);
            }

            let records: Vec<_> = loaded.records.iter().map(|r| r.record.to_json_map()).collect();
            let json = serde_json::to_string_pretty(&records)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("✔ {}건 정규화: {}", records.len(), path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Config { show, set_model, set_ollama_url, set_threshold, set_output_dir } => {
            // 환경변수 값이 파일에 저장되지 않도록 파일만 다시 읽는다
            let mut config = Config::load_from(&Config::config_path()?)?;
            let mut changed = false;

            if let Some(model) = set_model {
                config.model = model;
                changed = true;
            }
            if let Some(url) = set_ollama_url {
                config.ollama_url = url;
                changed = true;
            }
            if let Some(threshold) = set_threshold {
                config.threshold = threshold;
                changed = true;
            }
            if let Some(dir) = set_output_dir {
                config.output_dir = dir;
                changed = true;
            }

            if changed {
                ExhibitionMatcher::new(config.matcher_config(None, None, None))?;
                config.save()?;
                println!("✔ 설정 저장: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("설정 파일: {}", Config::config_path()?.display());
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}
