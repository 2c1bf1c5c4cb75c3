use std::fs;
use std::rc::Rc;

use serde_json::{json, Value};

use crate::{
    canada::canada_instance,
    dimacs,
    color::{ColoringInstance, ColorId, Palette},
    error::{InstanceError, ParamsError},
    search::hill_climbing::{HillClimbingResult, costs, total_cost},
};

/** reads the number of colors given on the command line */
pub fn read_nb_colors(arg:Option<&str>) -> Result<Palette, ParamsError> {
    let arg = arg.ok_or(ParamsError::MissingColors)?;
    let k = arg.trim().parse::<i64>()
        .map_err(|_| ParamsError::InvalidNumber(arg.to_string()))?;
    if k < 1 {
        return Err(ParamsError::OutOfRange(k));
    }
    Palette::new(k as usize).ok_or(ParamsError::OutOfRange(k))
}

/**
reads the instance to color: the map of Canada if no filename is given, a DIMACS graph otherwise.
returns the instance name and the instance.
*/
pub fn read_instance(filename:Option<&str>, verbose:bool) -> Result<(String, Rc<dyn ColoringInstance>), InstanceError> {
    let instance:Rc<dyn ColoringInstance> = match filename {
        None => Rc::new(canada_instance()),
        Some(f) => {
            if verbose { println!("reading instance: {}...", f); }
            Rc::new(dimacs::from_file(f)?)
        }
    };
    let inst_name = filename.unwrap_or("canada").to_string();
    if verbose {
        instance.display_statistics();
        println!("=======================");
    }
    Ok((inst_name, instance))
}

/** final report: one line per region with its color and cost, then the total */
pub fn report(inst:&dyn ColoringInstance, palette:&Palette, assignment:&[ColorId]) -> String {
    let region_costs = costs(inst, assignment);
    let mut res = String::from("Final Results of the Map with Costs\n");
    for u in inst.vertices() {
        res += format!("{}: {} (Cost: {})\n",
            inst.name(u), palette.symbol(assignment[u]), region_costs[u]
        ).as_str();
    }
    res += format!("Total conflicts: {}\n", total_cost(&region_costs)).as_str();
    res
}

/** statistics of a search, as exported in the performance file */
pub fn search_stats(
    inst:&dyn ColoringInstance,
    inst_name:&str,
    palette:&Palette,
    result:&HillClimbingResult,
    time_searched:f32,
) -> Value {
    let solution:Vec<Value> = inst.vertices().map(|u| json!({
        "region": inst.name(u),
        "color": palette.symbol(result.assignment[u]),
        "cost": result.costs[u],
    })).collect();
    json!({
        "inst_name": inst_name,
        "nb_colors": palette.len(),
        "nb_conflicts": result.total_cost(),
        "nb_iterations": result.nb_iterations(),
        "cost_trajectory": result.cost_trajectory,
        "moves": result.moves,
        "time_searched": time_searched,
        "solution": solution,
    })
}

/// exports search statistics to a file
pub fn export_stats(filename:&str, stats:&Value) -> std::io::Result<()> {
    fs::write(filename, serde_json::to_string(stats)?)
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::search::hill_climbing::hill_climbing;

    #[test]
    fn test_read_nb_colors() {
        assert_eq!(read_nb_colors(Some("3")), Ok(Palette::new(3).unwrap()));
        assert_eq!(read_nb_colors(None), Err(ParamsError::MissingColors));
        assert_eq!(read_nb_colors(Some("three")), Err(ParamsError::InvalidNumber("three".to_string())));
        assert_eq!(read_nb_colors(Some("0")), Err(ParamsError::OutOfRange(0)));
        assert_eq!(read_nb_colors(Some("5")), Err(ParamsError::OutOfRange(5)));
        assert_eq!(read_nb_colors(Some("-2")), Err(ParamsError::OutOfRange(-2)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ParamsError::MissingColors.to_string(),
            "Provide the number (1 to 4) of colors (k) as a command-line argument."
        );
        assert_eq!(ParamsError::OutOfRange(7).to_string(), "k should be between 1 and 4.");
        assert_eq!(ParamsError::InvalidNumber("x".to_string()).to_string(), "invalid number: x");
    }

    #[test]
    fn test_report_four_colors() {
        let (_, inst) = read_instance(None, false).unwrap();
        let palette = Palette::new(4).unwrap();
        let res = hill_climbing(inst.clone(), palette, false);
        let expected = "Final Results of the Map with Costs\n\
            BC: o (Cost: 0)\n\
            AB: r (Cost: 0)\n\
            SK: o (Cost: 0)\n\
            MB: j (Cost: 0)\n\
            ON: b (Cost: 0)\n\
            QC: j (Cost: 0)\n\
            NB: o (Cost: 0)\n\
            NS: j (Cost: 0)\n\
            PEI: b (Cost: 0)\n\
            NL: r (Cost: 0)\n\
            NU: o (Cost: 0)\n\
            NT: j (Cost: 0)\n\
            YT: b (Cost: 0)\n\
            Total conflicts: 0\n";
        assert_eq!(report(inst.as_ref(), &palette, &res.assignment), expected);
    }

    #[test]
    fn test_report_one_color() {
        let (_, inst) = read_instance(None, false).unwrap();
        let palette = Palette::new(1).unwrap();
        let text = report(inst.as_ref(), &palette, &[0 ; 13]);
        assert_eq!(text.lines().count(), 15);
        assert_eq!(text.lines().nth(1), Some("BC: b (Cost: 1)"));
        assert_eq!(text.lines().last(), Some("Total conflicts: 13"));
    }

    #[test]
    fn test_search_stats() {
        let (inst_name, inst) = read_instance(None, false).unwrap();
        let palette = Palette::new(2).unwrap();
        let res = hill_climbing(inst.clone(), palette, false);
        let stats = search_stats(inst.as_ref(), &inst_name, &palette, &res, 0.);
        assert_eq!(stats["inst_name"], "canada");
        assert_eq!(stats["nb_colors"], 2);
        assert_eq!(stats["nb_conflicts"], 5);
        assert_eq!(stats["cost_trajectory"], json!([8, 6, 5]));
        assert_eq!(stats["moves"][0], json!({"v": 9, "c_prev": 1, "c_next": 0}));
        assert_eq!(stats["solution"][9]["region"], "NL");
        assert_eq!(stats["solution"][9]["color"], "b");
    }

    #[test]
    fn test_read_dimacs_instance() {
        let (inst_name, inst) = read_instance(Some("insts/canada.col"), false).unwrap();
        assert_eq!(inst_name, "insts/canada.col");
        let res = hill_climbing(inst, Palette::new(4).unwrap(), false);
        assert_eq!(res.total_cost(), 0);
        assert!(read_instance(Some("insts/missing.col"), false).is_err());
    }
}
