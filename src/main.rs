//! Command-line interface for PlanSheet.
//! Reads a study-plan Markdown document, reports parse diagnostics, and
//! writes the rendered execution sheet next to it (or into `--output-dir`).

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use plansheet::parse;
use plansheet::render;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plansheet", version, about = "Convert a daily study-plan Markdown document into a styled Excel execution sheet")]
struct Args {
    /// Path to the Markdown plan; pass "-" to read from standard input
    input: PathBuf,

    /// Directory the workbook is written into
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Parse and report the extracted fields without writing a workbook
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let source = if args.input.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("读取标准输入失败")?;
        buffer
    } else {
        std::fs::read_to_string(&args.input)
            .with_context(|| format!("读取文件失败: {}", args.input.display()))?
    };

    let result = parse(&source);
    for warning in &result.warnings {
        eprintln!("警告: {}", warning);
    }
    if !result.errors.is_empty() {
        for error in &result.errors {
            eprintln!("错误: {}", error);
        }
        bail!("解析失败，未生成执行表");
    }

    if args.check {
        println!("学生: {}", result.student_name);
        println!("日期范围: {}", result.date_range);
        println!("核心目标: {}", result.core_target);
        println!("表格: {} 列 × {} 行", result.columns.len(), result.data_rows.len());
        return Ok(());
    }

    let artifact = render(&result).context("生成执行表失败")?;
    let path = args.output_dir.join(&artifact.filename);
    std::fs::write(&path, &artifact.bytes)
        .with_context(|| format!("写入文件失败: {}", path.display()))?;
    println!("{}", path.display());

    Ok(())
}
