use std::{
    hash::{Hash, Hasher},
    io::{BufWriter, Write},
    path::Path,
};

use fxhash::FxHasher64;

use crate::{
    route_provider::RouteProvider,
    route_query::{RouteQuery, RouteResult},
};

const CACHE_FOLDER_ENV_VAR: &str = "PITSTOP_CACHE_FOLDER";

fn hash_query<H>(query: &RouteQuery, include_stopover: bool, hasher: &mut H)
where
    H: Hasher,
{
    query.origin.to_string().hash(hasher);
    query.destination.to_string().hash(hasher);

    match query.stopover {
        Some(stopover) => {
            hasher.write_u64(stopover.x().to_bits());
            hasher.write_u64(stopover.y().to_bits());
        }
        None => hasher.write_u8(0),
    }

    hasher.write_u8(include_stopover as u8);
}

fn get_filename(query: &RouteQuery, include_stopover: bool, provider: &RouteProvider) -> String {
    let mut hasher = FxHasher64::default();

    hash_query(query, include_stopover, &mut hasher);
    provider.hash(&mut hasher);

    format!("{:016x}.json", hasher.finish())
}

pub fn cache_route(
    query: &RouteQuery,
    include_stopover: bool,
    provider: &RouteProvider,
    result: &RouteResult,
) -> Result<(), anyhow::Error> {
    let cache_folder_path = std::env::var(CACHE_FOLDER_ENV_VAR)?;

    let cache_folder = Path::new(&cache_folder_path);

    if !cache_folder.is_dir() {
        return Err(anyhow::anyhow!(format!(
            "Path {} is not a directory",
            cache_folder_path
        )));
    }

    let filename = get_filename(query, include_stopover, provider);

    let file = std::fs::File::create(cache_folder.join(filename))?;
    let mut writer = BufWriter::with_capacity(64 * 1024, file);
    serde_json::to_writer(&mut writer, &result)?;
    writer.flush()?;

    Ok(())
}

pub fn get_cached_route(
    query: &RouteQuery,
    include_stopover: bool,
    provider: &RouteProvider,
) -> Result<Option<RouteResult>, anyhow::Error> {
    let cache_folder_path = std::env::var(CACHE_FOLDER_ENV_VAR)?;

    let cache_folder = Path::new(&cache_folder_path);

    if !cache_folder.is_dir() {
        return Err(anyhow::anyhow!(format!(
            "Path {} is not a directory",
            cache_folder_path
        )));
    }

    let filename = get_filename(query, include_stopover, provider);
    let file_path = cache_folder.join(filename);

    if !file_path.is_file() {
        return Ok(None);
    }

    let file = std::fs::File::open(file_path)?;
    let result: RouteResult = serde_json::from_reader(file)?;

    Ok(Some(result))
}
