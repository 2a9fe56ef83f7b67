use bht::map::InsertError;
use bht::HashMap;

use log::info;

fn main() -> Result<(), InsertError> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let mut table = HashMap::new();

    table.insert(b"key1", "value 1")?;
    table.insert(b"key2", "value 2")?; // shares a bucket with key34
    table.insert(b"key1", "value 3")?;
    table.insert(b"key10", "value 10")?;
    table.insert(b"key20", "value 20")?;
    table.insert(b"key30", "value 30")?;
    table.insert(b"key11", "value 11")?; // shares a bucket with key13
    table.insert(b"key21", "value 21")?; // shares a bucket with key22 and key24
    table.insert(b"key31", "value 31")?;
    table.insert(b"key12", "value 12")?; // shares a bucket with key33
    table.insert(b"key22", "value 22")?;
    table.insert(b"key32", "value 32")?;
    table.insert(b"key13", "value 13")?;
    table.insert(b"key23", "value 23")?;
    table.insert(b"key33", "value 33")?;
    table.insert(b"key14", "value 14")?;
    table.insert(b"key24", "value 24")?;
    table.insert(b"key34", "value 34")?;

    info!("{} entries: {:?}", table.len(), table);

    for (index, length) in table.chain_lengths().iter().enumerate() {
        info!("bucket {:2}: {} entries", index, length);
    }

    for key in [&b"key1"[..], b"key2", b"key3", b"key11", b"key13"] {
        let name = String::from_utf8_lossy(key);

        match table.get(key) {
            Some(value) => info!("{} => {}", name, value),
            None => info!("{} is not present", name),
        }
    }

    Ok(())
}
