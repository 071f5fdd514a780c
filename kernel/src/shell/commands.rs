/// Built-in shell commands.
///
/// Stateless per line: a completed command line comes in, text goes out
/// through the console, and nothing survives to the next prompt. Exact
/// matches are checked before the `!calc` prefix, so `!clear` and `!help`
/// can never be shadowed. The prefix rule compares only the first five
/// bytes — `!calculate ...` reaches the calculator too, which mirrors the
/// original dispatcher and is pinned by a test.
use core::fmt::Write;

use crate::console::{Console, Surface};

use super::calc;

const CALC_PREFIX: &str = "!calc";

pub fn dispatch<S: Surface>(line: &str, con: &mut Console<S>) {
    match line {
        "!ZenOS" => con.write_str(BANNER),
        "!clear" => con.clear(),
        "!help" => con.write_str(HELP),
        _ if line.starts_with(CALC_PREFIX) => cmd_calc(&line[CALC_PREFIX.len()..], con),
        _ => con.write_str("Unknown command. Type !help\n"),
    }
}

fn cmd_calc<S: Surface>(expr: &str, con: &mut Console<S>) {
    match calc::evaluate(expr) {
        Ok(value) => {
            let _ = writeln!(con, "Result: {}", value);
        }
        Err(err) => {
            let _ = writeln!(con, "{}", err);
        }
    }
}

const HELP: &str = "\
Available commands:
!ZenOS  - Display ZenOS logo
!calc   - Simple calculator
!clear  - Clear screen
!help   - Show commands
";

// The ZenOS logo, rendered by `!ZenOS`. Taller than the screen on
// purpose; the console scrolls through it.
static BANNER: &str = "                              -=====+=---::. :%@%##%@%+.            
                             +@@@@%*######%%%%#+++++**#%+           
                            :@@@@@%++++++++++++*%%%%#+++#%=         
                            *@@@@@%++++++++++#%@@**#@%*++*%#.       
           =*=            :=@@@@@@%+++++++++@@#*++++*%@#+++#%=      
        .*@@@@@+-     :+#@@@@@@@@@%+++++++++%@*+++++++*%%*++*@%:    
        #@@@@@@@@@#+#@@@@@@@@@@@@@%+++++++*##@@+++++++++*%#+++#@:   
         %@@@@@@@@@@@@@@@@@@@@@@@@%====++*@@#%@#+++++++++++++++*@.  
         .@@@@@@@@@@@@@@@@@@@@@@@@%======*@@+*@@++++++++++++++++%%  
          =@@@@@@@@@@@@@@@@@@@@@@@%======%@@*+%@*+++++++++++++++*@- 
          -@@@@@@@@@@@@@@@@@@@@@@@%====*%@%@%=#@%++++++++++++++++%# 
          #@@@@@@@@@@@@@@@@@@@@@@@%*#%%*#@#%@++@@+=++++++++++++++#@ 
         +@@@@@@@@@@@@@@@@@@@@@@@@@@#:.=@%#%@+=#@+==+++++++++++++*@.
      .-#@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@%%%%@%==+@#===++++++++++++#% 
 :+#%@@@@@@@@@@@@@@@@@@@@@@@@@%%@@@++*#####*====@%====++++++++++*@# 
-@@@@@@@@@@@@@@@@@@@@@@@@@@@@#: -@@%=============%%=====++++++++*@* 
+@@@@@@@@@@@@@@@@@@@@@@@@@@@#   -@@%=============%@=====++++++++*@: 
*@@@@@@@@@@@@@@@@@@@@@@@@@@@=   -@@%======*%+====%@+====+++++++++#@:
*@@@@@@@@@@@@@@@@@@@@@@@@@@@*   -@@%======+@@====#@=====++++++++++@%
=@@@@@@@@@@@@@@@@@@@@@@@@@@@@+  -@@%=======%@*===%@=====++++++++++@*
 :-+#%@@@@@@@@@@@@@@@@@@@@@@@@@##@@%=======*@%==+@%====++++++++++%@-
      .-%@@@@@@@@@@@@@@@@@@@@@@@@@%=======*@%==*@*====++++++++*@%:  
         *@@@@@@@@@@@@@@@@@@@@@@@@%=======*@%=+@%+===++++++++@@-    
          #@@@@@@@@@@@@@@@@@@@@@@@%=======*@@#%@*===+++++++++@@.    
          -@@@@@@@@@@@@@@@@@@@@@@@%=======*@@@@#==+++++++++++#@+    
          :@@@@@@@@@@@@@@@@@@@@@@@%=======*@@@@*=+++++++++++++@@    
          %@@@@@@@@@@@@@@@@@@@@@@@%=======#@#*@@*+++++++++++++#@-   
         #@@@@@@@@@@@@@@@@@@@@@@@@%=======#@# *@@+++++++++**++#@-   
        *@@@@@@@@@@#%@@@@@@@@@@@@@%+++++++*@#  #@@%%@@%%#*#%*#@*    
        :#@@@@@@*-   :=*@@@@@@@@@@%++++++++@@#%%##**+***#@@@@%=     
          :*%+:          :-*@@@@@@%++++++++%@*+++++++++++*@+        
                            #@@@@@%++++++++*@@*+***+++++++@*        
                            -@@@@@%+++++++++*@@@@@@++++++#@=:.      
                             *@@@@@*++++++++++##%%*+++++#@@@%=      
                              =+++#%@%##*************##%@%*-        
";
