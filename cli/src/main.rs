// FAT32 boot-metadata tool for raw disk images
//
// Usage: fatprep <command> /dev/<image-path>:<volume-name> [options]

mod image;

use std::process;

use fat32::{
    format_partition, list_partition, verify_partition, DevicePath, FormatOptions, FsInfo,
};
use image::ImageBlockIo;

fn usage(program: &str) -> ! {
    eprintln!(
        "Usage: {} <command> /dev/<image-path>:<volume-name> [options]",
        program
    );
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  list     print the first partition's start LBA and length");
    eprintln!("  format   resolve a partition's geometry; with --commit, write the");
    eprintln!("           MBR entry, VBR geometry and FSInfo sector");
    eprintln!("  verify   re-read a partition's boot metadata and check signatures");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --partition <N>   partition table slot 0-3 (default 0)");
    eprintln!("  --commit          actually write sectors; format is a dry run by default");
    process::exit(1);
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        usage(&args[0]);
    }

    let command = args[1].as_str();
    let device = args[2].as_str();

    let mut partition = 0usize;
    let mut commit = false;
    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--partition" => {
                i += 1;
                if i == args.len() {
                    eprintln!("ERROR: --partition needs an index");
                    process::exit(1);
                }
                partition = match args[i].parse() {
                    Ok(n) => n,
                    Err(_) => {
                        eprintln!("ERROR: invalid partition index: {}", args[i]);
                        process::exit(1);
                    }
                };
            }
            "--commit" => commit = true,
            unknown => {
                eprintln!("ERROR: unknown option: {}", unknown);
                process::exit(1);
            }
        }
        i += 1;
    }

    let path = match DevicePath::parse(device) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("ERROR: {}: {}", device, e);
            process::exit(1);
        }
    };

    let mut block_io = match ImageBlockIo::open(path.image_path) {
        Ok(block_io) => block_io,
        Err(e) => {
            eprintln!("ERROR: cannot open {}: {}", path.image_path, e);
            process::exit(1);
        }
    };

    let result = match command {
        "list" => cmd_list(&mut block_io, path.volume_name),
        "format" => cmd_format(&mut block_io, partition, commit),
        "verify" => cmd_verify(&mut block_io, partition),
        _ => usage(&args[0]),
    };

    if let Err(e) = result {
        eprintln!("ERROR: {}", e);
        process::exit(1);
    }
}

fn cmd_list(block_io: &mut ImageBlockIo, volume_name: &str) -> fat32::Result<()> {
    let report = list_partition(block_io, volume_name)?;
    println!("{}", report);
    Ok(())
}

fn cmd_format(block_io: &mut ImageBlockIo, partition: usize, commit: bool) -> fat32::Result<()> {
    let options = FormatOptions { dry_run: !commit };
    let report = format_partition(block_io, partition, options)?;

    println!(
        "partition start: {} length: {}",
        report.entry.start_lba, report.entry.length_sectors
    );
    if report.committed {
        println!("wrote MBR entry, VBR geometry, FSInfo sector");
    } else {
        println!("dry run, nothing written (pass --commit to format)");
    }
    Ok(())
}

fn cmd_verify(block_io: &mut ImageBlockIo, partition: usize) -> fat32::Result<()> {
    let report = verify_partition(block_io, partition)?;

    println!(
        "partition start: {} length: {}",
        report.entry.start_lba, report.entry.length_sectors
    );
    println!(
        "active: {} type FAT32-LBA: {}",
        report.entry.is_active(),
        report.entry.is_fat32_lba()
    );
    println!(
        "hidden sectors: {} total sectors: {}",
        report.geometry.hidden_sectors, report.geometry.total_sectors
    );
    if report.fs_info.free_count == FsInfo::UNKNOWN {
        println!("free clusters: unknown");
    } else {
        println!("free clusters: {}", report.fs_info.free_count);
    }
    if report.fs_info.next_free == FsInfo::UNKNOWN {
        println!("next free cluster: search from start");
    } else {
        println!("next free cluster: {}", report.fs_info.next_free);
    }
    Ok(())
}
