use std::process;
use std::time::Instant;

use clap::{App, load_yaml};

use canada_color::error::ParamsError;
use canada_color::search::hill_climbing::hill_climbing;
use canada_color::util::{export_stats, read_instance, read_nb_colors, report, search_stats};


/** colors the map of Canada (or a DIMACS graph) with k colors using a hill-climbing */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("hill_climbing.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let palette = match read_nb_colors(main_args.value_of("colors")) {
        Ok(palette) => palette,
        Err(e @ ParamsError::InvalidNumber(_)) => {
            eprintln!("{}", e);
            process::exit(1);
        }
        Err(e) => { // usage and range errors are not failures
            println!("{}", e);
            return;
        }
    };
    let verbose = main_args.is_present("verbose");
    let (inst_name, instance) = match read_instance(main_args.value_of("instance"), verbose) {
        Ok(res) => res,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    // solve it
    let time_init = Instant::now();
    let result = hill_climbing(instance.clone(), palette, verbose);
    let duration = time_init.elapsed().as_secs_f32();
    print!("{}", report(instance.as_ref(), &palette, &result.assignment));

    // export statistics
    if let Some(filename) = main_args.value_of("perf") {
        if verbose { println!("printing perfs in: {}", filename); }
        let stats = search_stats(instance.as_ref(), &inst_name, &palette, &result, duration);
        if let Err(why) = export_stats(filename, &stats) {
            eprintln!("couldn't write {}: {}", filename, why);
            process::exit(1);
        }
    }
}
