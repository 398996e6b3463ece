use lensprofile_rs::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    input: InputData,
    params: Params,
    #[serde(skip_deserializing)]
    result: ResultData,
}

#[derive(Debug, Deserialize, Serialize)]
struct InputData {
    r_proj: Vec<f64>,
    z_cluster: f64,
    z_source: f64,
}

#[derive(Debug, Deserialize, Serialize)]
struct Params {
    mdelta: f64,
    cdelta: f64,
    #[serde(default = "default_delta")]
    delta: u32,
    #[serde(default = "default_profile")]
    halo_profile_parameterization: String,
    #[serde(default = "default_source_model")]
    z_src_model: String,
    cosmo: BTreeMap<String, f64>,
    #[serde(flatten)]
    extra: Option<Value>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct ResultData {
    rho: Vec<f64>,
    sigma: Vec<f64>,
    delta_sigma: Vec<f64>,
    sigma_crit: f64,
    gamma_t: Vec<f64>,
    kappa: Vec<f64>,
    g_t: Vec<f64>,
}

fn default_delta() -> u32 {
    DEFAULT_DELTA
}

fn default_profile() -> String {
    "nfw".to_string()
}

fn default_source_model() -> String {
    "single_plane".to_string()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input_dir = Path::new("../output/reference");
    let output_dir = Path::new("../output/lensprofile_rs");

    if !input_dir.exists() {
        eprintln!(
            "Input directory {:?} does not exist. Generate the reference cases first.",
            input_dir
        );
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            println!("Processing {:?}", path.file_name().unwrap_or_default());
            process_file(&path, output_dir)?;
        }
    }

    Ok(())
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<(), Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    let cosmo = Cosmology::from_params(data.params.cosmo.iter().map(|(k, &v)| (k.as_str(), v)))?;
    let profile: HaloProfileFamily = data.params.halo_profile_parameterization.parse()?;
    let source_model: SourceRedshiftModel = data.params.z_src_model.parse()?;

    let model = Lensing::new()
        .mass(data.params.mdelta)
        .concentration(data.params.cdelta)
        .delta(data.params.delta)
        .profile(profile)
        .source_model(source_model)
        .cosmology(cosmo)
        .build()?;

    let r = &data.input.r_proj;
    let prediction = model.predict(r, data.input.z_cluster, data.input.z_source)?;

    data.result = ResultData {
        rho: model.density(r)?,
        sigma: prediction.sigma,
        delta_sigma: prediction.delta_sigma,
        sigma_crit: prediction.sigma_crit,
        gamma_t: prediction.gamma_t,
        kappa: prediction.kappa,
        g_t: prediction.g_t,
    };

    let file_name = input_path.file_name().ok_or("input path has no file name")?;
    let output_path = output_dir.join(file_name);
    let output_json = serde_json::to_string_pretty(&data)?;
    fs::write(output_path, output_json)?;

    Ok(())
}
