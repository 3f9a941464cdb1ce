//! Text circuit diagrams.

use std::f64::consts::PI;

use qturb_ir::{Circuit, Instruction, InstructionKind, ParameterExpression, StandardGate};

/// Format an angle, using π fractions for the common values.
pub fn format_param(param: &ParameterExpression) -> String {
    let Some(value) = param.as_f64() else {
        return param.to_string();
    };
    let named = [
        (PI, "π"),
        (PI / 2.0, "π/2"),
        (PI / 4.0, "π/4"),
        (-PI, "-π"),
        (-PI / 2.0, "-π/2"),
    ];
    named
        .iter()
        .find(|(v, _)| (value - v).abs() < 1e-10)
        .map_or_else(|| format!("{value:.2}"), |(_, s)| (*s).to_string())
}

/// Boxed label for a gate on its target qubit.
fn target_label(gate: &StandardGate) -> String {
    use StandardGate::*;

    let text = match gate {
        H => "H".to_string(),
        X => "X".to_string(),
        Y => "Y".to_string(),
        Z => "Z".to_string(),
        SX => "√X".to_string(),
        Rx(p) => format!("RX({})", format_param(p)),
        Ry(p) => format!("RY({})", format_param(p)),
        Rz(p) | CRz(p) => format!("RZ({})", format_param(p)),
        P(p) => format!("P({})", format_param(p)),
        CX => return "⊕".to_string(),
        CZ => return "●".to_string(),
    };
    format!("[{text}]")
}

/// One layer of the diagram.
struct Column {
    /// Label per qubit row; `None` draws plain wire.
    cells: Vec<Option<String>>,
    /// Qubit ranges joined by a vertical line.
    spans: Vec<(usize, usize)>,
}

impl Column {
    fn new(num_qubits: usize) -> Self {
        Self {
            cells: vec![None; num_qubits],
            spans: vec![],
        }
    }

    fn width(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(1)
    }

    fn crosses(&self, row: usize) -> bool {
        self.spans.iter().any(|&(lo, hi)| lo < row && row < hi)
    }

    fn links(&self, gap: usize) -> bool {
        self.spans.iter().any(|&(lo, hi)| lo <= gap && gap < hi)
    }

    fn place(&mut self, inst: &Instruction) {
        let rows: Vec<usize> = inst.qubits.iter().map(|q| q.index()).collect();
        match &inst.kind {
            InstructionKind::Gate(gate) => {
                if gate.kind.is_controlled() {
                    self.cells[rows[0]] = Some("●".into());
                    self.cells[rows[1]] = Some(target_label(&gate.kind));
                    let (lo, hi) = (rows[0].min(rows[1]), rows[0].max(rows[1]));
                    self.spans.push((lo, hi));
                } else {
                    for &r in &rows {
                        self.cells[r] = Some(target_label(&gate.kind));
                    }
                }
            }
            InstructionKind::Measure => {
                for &r in &rows {
                    self.cells[r] = Some("M".into());
                }
            }
            InstructionKind::Barrier => {
                for &r in &rows {
                    self.cells[r] = Some("░".into());
                }
            }
        }
    }
}

/// Assign every instruction to the earliest column after all earlier
/// instructions touching the rows it covers.
fn layer(circuit: &Circuit) -> Vec<Column> {
    let n = circuit.num_qubits();
    let mut columns: Vec<Column> = vec![];
    let mut level = vec![0usize; n];

    for inst in circuit.instructions() {
        let (Some(lo), Some(hi)) = (
            inst.qubits.iter().map(|q| q.index()).min(),
            inst.qubits.iter().map(|q| q.index()).max(),
        ) else {
            continue;
        };
        let depth = level[lo..=hi].iter().copied().max().unwrap_or(0);
        while columns.len() <= depth {
            columns.push(Column::new(n));
        }
        columns[depth].place(inst);
        level[lo..=hi].fill(depth + 1);
    }
    columns
}

fn centered(label: &str, width: usize, fill: char) -> String {
    let len = label.chars().count();
    let left = (width - 1) / 2 - (len - 1) / 2;
    let right = width - len - left;
    let mut out = String::with_capacity(width * 3);
    out.extend(std::iter::repeat_n(fill, left));
    out.push_str(label);
    out.extend(std::iter::repeat_n(fill, right));
    out
}

/// Draw the circuit as text, one wire per qubit.
///
/// Controls are drawn as `●`, CX targets as `⊕`, measurements as `M` and
/// barriers as `░`; other gates appear as boxed labels such as `[H]` or
/// `[RY(π/4)]`.
pub fn draw_circuit(circuit: &Circuit) -> String {
    let n = circuit.num_qubits();
    if n == 0 {
        return String::new();
    }

    let columns = layer(circuit);
    let widths: Vec<usize> = columns.iter().map(Column::width).collect();
    let names: Vec<String> = (0..n).map(|i| format!("q{i}:")).collect();
    let name_width = names.iter().map(String::len).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(2 * n - 1);
    for (row, name) in names.iter().enumerate() {
        let mut line = format!("{name:<name_width$} ─");
        for (col, &width) in columns.iter().zip(&widths) {
            let cell = match &col.cells[row] {
                Some(label) => centered(label, width, '─'),
                None if col.crosses(row) => centered("┼", width, '─'),
                None => "─".repeat(width),
            };
            line.push_str(&cell);
            line.push('─');
        }
        lines.push(line);

        if row + 1 < n {
            let mut gap = " ".repeat(name_width + 2);
            for (col, &width) in columns.iter().zip(&widths) {
                let mark = if col.links(row) { "│" } else { " " };
                gap.push_str(&centered(mark, width, ' '));
                gap.push(' ');
            }
            lines.push(gap.trim_end().to_string());
        }
    }
    lines.join("\n")
}
