use chrono::NaiveDateTime;
use dzen::mach::Evaluate;
use std::process::Command;

// argv[1] is the code block, argv[2] the reference instant. Results that
// are not numbers print NaN, which the interpreter rejects.
const SCRIPT: &str = "try {\
const f = eval(process.argv[1]);\
if (typeof f !== 'function') throw new TypeError('Code must evaluate to a function');\
const r = f(new Date(process.argv[2]));\
process.stdout.write(typeof r === 'number' ? String(r) : 'NaN');\
} catch (e) {\
process.stderr.write(String(e));\
process.exitCode = 1;\
}";

/// Evaluates code blocks in a child Node.js process.
pub struct NodeEvaluator {
    program: String,
}

impl NodeEvaluator {
    pub fn new(program: &str) -> NodeEvaluator {
        NodeEvaluator {
            program: program.to_string(),
        }
    }
}

impl Evaluate for NodeEvaluator {
    fn evaluate(&self, code: &str, now: NaiveDateTime) -> Result<f64, String> {
        log::debug!("evaluating code block with {}", self.program);
        let output = Command::new(&self.program)
            .arg("-e")
            .arg(SCRIPT)
            .arg(code)
            .arg(now.format("%Y-%m-%dT%H:%M:%S").to_string())
            .output()
            .map_err(|e| format!("{}: {}", self.program, e))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return match stderr.trim() {
                "" => Err(format!("{} exited with {}", self.program, output.status)),
                message => Err(message.to_string()),
            };
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stdout = stdout.trim();
        stdout
            .parse::<f64>()
            .map_err(|_| format!("Not a number: {}", stdout))
    }
}
