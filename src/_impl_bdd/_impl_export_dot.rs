use crate::*;
use std::io::Write;

/// `.dot` export procedure for `Bdd`s.
impl Bdd {
    /// Output this `Bdd` as a `.dot` string into the given `output` writer.
    ///
    /// Inputs are labelled `x_0`, `x_1`, ... in the graph.
    ///
    /// If `zero_pruned` is true, the `0` terminal and edges leading to it are
    /// not shown. This can greatly simplify the graph without losing
    /// information.
    pub fn write_as_dot_string(
        &self,
        output: &mut dyn Write,
        zero_pruned: bool,
    ) -> Result<(), std::io::Error> {
        write_bdd_as_dot(output, self, zero_pruned)
    }

    /// Convert this `Bdd` to a `.dot` string.
    ///
    /// Inputs are labelled `x_0`, `x_1`, ... in the graph.
    ///
    /// If `zero_pruned` is true, the `0` terminal and edges leading to it are
    /// not shown. This can greatly simplify the graph without losing
    /// information.
    pub fn to_dot_string(&self, zero_pruned: bool) -> String {
        let mut buffer: Vec<u8> = Vec::new();
        write_bdd_as_dot(&mut buffer, self, zero_pruned)
            .expect("Cannot write BDD to .dot string.");
        String::from_utf8(buffer).expect("Invalid UTF formatting in .dot string.")
    }
}

/// **(internal)** Write the given `Bdd` into the output buffer as a `.dot`
/// graph: one vertex definition per node and one edge per link, with high
/// links solid and low links dotted. Shared nodes are emitted once, however
/// many references they receive.
fn write_bdd_as_dot(
    output: &mut dyn Write,
    bdd: &Bdd,
    zero_pruned: bool,
) -> Result<(), std::io::Error> {
    writeln!(output, "digraph G {{")?;
    writeln!(
        output,
        "init__ [label=\"\", style=invis, height=0, width=0];"
    )?;
    writeln!(output, "init__ -> {};", bdd.root_pointer())?;

    /*
       Fortunately, it seems that .dot does not care about ordering of graph
       elements, so we can just go through the node table and print it as is:
       every node appears exactly once that way, regardless of how many edges
       lead into it.
    */

    // terminal nodes
    if !zero_pruned {
        writeln!(
            output,
            "0 [shape=box, label=\"0\", style=filled, shape=box, height=0.3, width=0.3];"
        )?;
    }
    writeln!(
        output,
        "1 [shape=box, label=\"1\", style=filled, shape=box, height=0.3, width=0.3];"
    )?;

    // decision nodes
    for node_pointer in bdd.pointers().skip(2) {
        // write the node itself
        writeln!(
            output,
            "{}[label=\"x_{}\"];",
            node_pointer,
            bdd.var_of(node_pointer)
        )?;
        let high_link = bdd.high_link_of(node_pointer);
        if !zero_pruned || !high_link.is_zero() {
            // write "high" link
            writeln!(output, "{} -> {} [style=filled];", node_pointer, high_link)?;
        }
        let low_link = bdd.low_link_of(node_pointer);
        if !zero_pruned || !low_link.is_zero() {
            // write "low" link
            writeln!(output, "{} -> {} [style=dotted];", node_pointer, low_link)?;
        }
    }
    writeln!(output, "}}")?;
    Ok(())
}
